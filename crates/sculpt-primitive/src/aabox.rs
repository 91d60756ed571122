//! Axis-aligned box primitive.
//!
//! Used by the spatial index as node bounds, so ray and sphere queries
//! against boxes decide which subtrees to descend into.

use serde::{Deserialize, Serialize};
use sculpt_math::{Point3, Vec3};

use crate::{point_is_finite, PrimitiveError, Result};

/// Axis-aligned box in 3D.
///
/// `min <= max` holds componentwise for boxes built with [`AaBox::new`] by a
/// well-behaved caller and is enforced by [`AaBox::try_new`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AaBox {
    /// Minimum corner.
    pub min: Point3,
    /// Maximum corner.
    pub max: Point3,
}

impl AaBox {
    /// Create a box from min and max corners.
    pub fn new(min: Point3, max: Point3) -> Self {
        Self { min, max }
    }

    /// Create a box, rejecting non-finite or inverted corners.
    pub fn try_new(min: Point3, max: Point3) -> Result<Self> {
        if !point_is_finite(&min) || !point_is_finite(&max) {
            log::debug!("rejected box with non-finite corners");
            return Err(PrimitiveError::NonFinite("box"));
        }
        if let Some(axis) = (0..3).find(|&i| min[i] > max[i]) {
            log::debug!("rejected inverted box {min:?} .. {max:?}");
            return Err(PrimitiveError::InvertedBox { axis });
        }
        Ok(Self::new(min, max))
    }

    /// Create a box centered at `center` with the given half extents.
    pub fn from_center_half_extents(center: Point3, half: Vec3) -> Self {
        Self::new(center - half, center + half)
    }

    /// Tightest box containing every point of `points`.
    pub fn from_points<'a, I>(points: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a Point3>,
    {
        let mut iter = points.into_iter().peekable();
        if iter.peek().is_none() {
            return Err(PrimitiveError::EmptyPointSet);
        }
        let mut bounds = Self::empty();
        for p in iter {
            bounds.include_point(p);
        }
        Ok(bounds)
    }

    /// Create an empty (inverted) box suitable for expansion.
    pub fn empty() -> Self {
        Self {
            min: Point3::new(f32::INFINITY, f32::INFINITY, f32::INFINITY),
            max: Point3::new(f32::NEG_INFINITY, f32::NEG_INFINITY, f32::NEG_INFINITY),
        }
    }

    /// Expand this box to include a point.
    pub fn include_point(&mut self, p: &Point3) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.min.z = self.min.z.min(p.z);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
        self.max.z = self.max.z.max(p.z);
    }

    /// Center point.
    pub fn center(&self) -> Point3 {
        nalgebra::center(&self.min, &self.max)
    }

    /// Size along each axis.
    pub fn extent(&self) -> Vec3 {
        self.max - self.min
    }

    /// Whether `p` lies inside or on the boundary.
    pub fn contains_point(&self, p: &Point3) -> bool {
        (0..3).all(|i| self.min[i] <= p[i] && p[i] <= self.max[i])
    }
}
