#![warn(missing_docs)]

//! Math types for sculpt geometry queries.
//!
//! Thin wrappers around nalgebra providing the single-precision point and
//! vector types used by every predicate, the fixed tolerance constants, and
//! the shared quadratic-equation solver.

use nalgebra::Vector3;

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f32>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f32>;

/// Tolerance constants for degeneracy checks.
///
/// These are process-wide constants. Predicates read them directly and never
/// take a tolerance argument, so every call site sees identical boundary
/// behavior.
#[derive(Debug, Clone, Copy)]
pub struct Tolerance;

impl Tolerance {
    /// Machine epsilon for `f32`.
    ///
    /// Used for near-parallel ray/plane and ray/triangle rejection, the
    /// single-root branch of [`solve_quadratic`] and degeneracy checks.
    pub const EPSILON: f32 = f32::EPSILON;

    /// Check if a squared length is effectively zero.
    #[inline]
    pub fn is_zero_sqr(len_sqr: f32) -> bool {
        len_sqr <= Self::EPSILON
    }
}

/// Real roots of `a·x² + b·x + c = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuadraticRoots {
    /// No real root (negative discriminant).
    None,
    /// A single (double) root.
    One(f32),
    /// Two distinct roots, in no particular order.
    Two(f32, f32),
}

impl QuadraticRoots {
    /// Number of real roots.
    pub fn count(&self) -> usize {
        match self {
            QuadraticRoots::None => 0,
            QuadraticRoots::One(_) => 1,
            QuadraticRoots::Two(_, _) => 2,
        }
    }

    /// The smallest root, if any.
    pub fn min(&self) -> Option<f32> {
        match *self {
            QuadraticRoots::None => None,
            QuadraticRoots::One(s) => Some(s),
            QuadraticRoots::Two(s1, s2) => Some(s1.min(s2)),
        }
    }

    /// Iterate over the roots.
    pub fn iter(&self) -> impl Iterator<Item = f32> {
        let (first, second) = match *self {
            QuadraticRoots::None => (None, None),
            QuadraticRoots::One(s) => (Some(s), None),
            QuadraticRoots::Two(s1, s2) => (Some(s1), Some(s2)),
        };
        first.into_iter().chain(second)
    }
}

/// Solve `a·x² + b·x + c = 0` for real `x`.
///
/// A discriminant below [`Tolerance::EPSILON`] (but not negative) is treated
/// as a double root. Two roots are computed in the cancellation-free form
/// `q = -(b + sign(b)·√disc) / 2`, `x1 = q / a`, `x2 = c / q`.
///
/// `a` must be non-zero.
pub fn solve_quadratic(a: f32, b: f32, c: f32) -> QuadraticRoots {
    debug_assert!(a != 0.0, "quadratic coefficient must be non-zero");

    let disc = b * b - 4.0 * a * c;
    if disc < 0.0 {
        QuadraticRoots::None
    } else if disc < Tolerance::EPSILON {
        QuadraticRoots::One(-b / (2.0 * a))
    } else {
        let sqrt_disc = disc.sqrt();
        let q = if b > 0.0 {
            -0.5 * (b + sqrt_disc)
        } else {
            -0.5 * (b - sqrt_disc)
        };
        QuadraticRoots::Two(q / a, c / q)
    }
}

/// Componentwise minimum of two vectors.
#[inline]
pub fn component_min(a: &Vec3, b: &Vec3) -> Vec3 {
    Vec3::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z))
}

/// Componentwise maximum of two vectors.
#[inline]
pub fn component_max(a: &Vec3, b: &Vec3) -> Vec3 {
    Vec3::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z))
}

/// Largest component of a vector.
#[inline]
pub fn max_component(v: &Vec3) -> f32 {
    v.x.max(v.y).max(v.z)
}

/// Smallest component of a vector.
#[inline]
pub fn min_component(v: &Vec3) -> f32 {
    v.x.min(v.y).min(v.z)
}
