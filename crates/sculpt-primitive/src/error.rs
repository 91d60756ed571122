//! Error types for checked primitive construction.

use thiserror::Error;

/// Errors raised by the checked (`try_new`) primitive constructors.
///
/// Intersection predicates never produce these; they only guard the
/// boundary where a collaborator turns raw data into primitives.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PrimitiveError {
    /// Sphere radius is negative.
    #[error("sphere radius must be non-negative, got {0}")]
    NegativeRadius(f32),

    /// A coordinate or scalar is NaN or infinite.
    #[error("{0} contains a non-finite value")]
    NonFinite(&'static str),

    /// Plane normal has (near) zero length.
    #[error("plane normal has zero length")]
    ZeroNormal,

    /// Ray direction has (near) zero length.
    #[error("ray direction has zero length")]
    ZeroDirection,

    /// Triangle vertices are collinear.
    #[error("triangle is degenerate (collinear vertices)")]
    DegenerateTriangle,

    /// Box minimum exceeds its maximum on an axis.
    #[error("box minimum exceeds maximum on axis {axis}")]
    InvertedBox {
        /// Offending axis index (0 = x, 1 = y, 2 = z).
        axis: usize,
    },

    /// No points were supplied to build a bounding box.
    #[error("cannot bound an empty point set")]
    EmptyPointSet,
}

/// Result type for checked primitive construction.
pub type Result<T> = std::result::Result<T, PrimitiveError>;
