//! Ray representation.

use serde::{Deserialize, Serialize};
use sculpt_math::{Point3, Tolerance, Vec3};

use crate::{point_is_finite, vec_is_finite, PrimitiveError, Result};

/// A ray in 3D space defined by origin and direction.
///
/// The direction is stored as given. Ray parameters returned by the
/// intersection queries are in units of `direction`, so they are distances
/// only when the direction has unit length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ray {
    /// Origin point of the ray.
    pub origin: Point3,
    /// Direction of the ray.
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray from origin and direction.
    pub fn new(origin: Point3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Create a new ray, rejecting a zero-length or non-finite direction.
    pub fn try_new(origin: Point3, direction: Vec3) -> Result<Self> {
        if !point_is_finite(&origin) || !vec_is_finite(&direction) {
            log::debug!("rejected ray with non-finite data");
            return Err(PrimitiveError::NonFinite("ray"));
        }
        if Tolerance::is_zero_sqr(direction.norm_squared()) {
            log::debug!("rejected ray with zero direction at {origin:?}");
            return Err(PrimitiveError::ZeroDirection);
        }
        Ok(Self::new(origin, direction))
    }

    /// Evaluate the ray at parameter `t`: `origin + t * direction`.
    #[inline]
    pub fn point_at(&self, t: f32) -> Point3 {
        self.origin + t * self.direction
    }

    /// Componentwise reciprocal of the direction.
    ///
    /// Zero components become `±inf`, which the slab test relies on.
    #[inline]
    pub fn inv_direction(&self) -> Vec3 {
        Vec3::new(
            1.0 / self.direction.x,
            1.0 / self.direction.y,
            1.0 / self.direction.z,
        )
    }
}
