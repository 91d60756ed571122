//! Plane primitive.

use serde::{Deserialize, Serialize};
use sculpt_math::{Point3, Tolerance, Vec3};

use crate::{point_is_finite, vec_is_finite, PrimitiveError, Result};

/// A plane given by a point on it and its unit normal.
///
/// The normal also selects the front side: ray/plane queries only report
/// rays approaching from the side the normal points to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    /// A point on the plane.
    pub point: Point3,
    /// Unit normal.
    pub normal: Vec3,
}

impl Plane {
    /// Create a plane. `normal` is used as given and should be unit length.
    pub fn new(point: Point3, normal: Vec3) -> Self {
        Self { point, normal }
    }

    /// Create a plane, normalizing `normal` and rejecting a zero normal.
    pub fn try_new(point: Point3, normal: Vec3) -> Result<Self> {
        if !point_is_finite(&point) || !vec_is_finite(&normal) {
            log::debug!("rejected plane with non-finite data");
            return Err(PrimitiveError::NonFinite("plane"));
        }
        if Tolerance::is_zero_sqr(normal.norm_squared()) {
            log::debug!("rejected plane with zero normal at {point:?}");
            return Err(PrimitiveError::ZeroNormal);
        }
        Ok(Self::new(point, normal.normalize()))
    }

    /// Signed distance from `p` to the plane, positive on the front side.
    #[inline]
    pub fn signed_distance(&self, p: &Point3) -> f32 {
        (p - self.point).dot(&self.normal)
    }
}
