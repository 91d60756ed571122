//! Ray-plane intersection (closed-form, front side only).

use sculpt_math::Tolerance;
use sculpt_primitive::{Plane, Ray};

use super::RayHit;

/// Intersect a ray with the front side of a plane.
///
/// Only rays travelling against the normal (`direction · normal < -ε`) are
/// reported; parallel, grazing and back-side rays give `None`. The sign of
/// `t` is not checked, so a plane behind the ray origin is still a hit with
/// negative `t`.
pub fn intersect_ray_plane(ray: &Ray, plane: &Plane) -> Option<RayHit> {
    let d = ray.direction.dot(&plane.normal);

    if d > -Tolerance::EPSILON {
        return None;
    }

    let t = (plane.point - ray.origin).dot(&plane.normal) / d;
    Some(RayHit::new(t, ray.point_at(t)))
}
