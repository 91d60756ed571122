//! Sphere primitive.

use serde::{Deserialize, Serialize};
use sculpt_math::Point3;

use crate::{point_is_finite, PrimitiveError, Result};

/// A sphere given by its center and radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    /// Center point.
    pub center: Point3,
    /// Radius (non-negative).
    pub radius: f32,
}

impl Sphere {
    /// Create a sphere. The radius is expected to be non-negative.
    pub fn new(center: Point3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Create a sphere, rejecting negative or non-finite input.
    pub fn try_new(center: Point3, radius: f32) -> Result<Self> {
        if !point_is_finite(&center) || !radius.is_finite() {
            log::debug!("rejected sphere with non-finite data: {center:?} r={radius}");
            return Err(PrimitiveError::NonFinite("sphere"));
        }
        if radius < 0.0 {
            log::debug!("rejected sphere with negative radius {radius}");
            return Err(PrimitiveError::NegativeRadius(radius));
        }
        Ok(Self::new(center, radius))
    }

    /// Squared radius.
    #[inline]
    pub fn radius_sqr(&self) -> f32 {
        self.radius * self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_new_accepts_zero_radius() {
        let s = Sphere::try_new(Point3::origin(), 0.0).unwrap();
        assert_eq!(s.radius, 0.0);
    }

    #[test]
    fn test_try_new_rejects_negative_radius() {
        let err = Sphere::try_new(Point3::origin(), -1.0).unwrap_err();
        assert_eq!(err, PrimitiveError::NegativeRadius(-1.0));
    }

    #[test]
    fn test_try_new_rejects_nan() {
        let err = Sphere::try_new(Point3::new(f32::NAN, 0.0, 0.0), 1.0).unwrap_err();
        assert_eq!(err, PrimitiveError::NonFinite("sphere"));
    }

    #[test]
    fn test_radius_sqr() {
        assert_eq!(Sphere::new(Point3::origin(), 3.0).radius_sqr(), 9.0);
    }

    #[test]
    fn test_serde_json() {
        let s = Sphere::new(Point3::new(1.0, 2.0, 3.0), 0.5);
        let json = serde_json::to_string(&s).unwrap();
        let back: Sphere = serde_json::from_str(&json).unwrap();
        assert_eq!(s, back);
    }
}
