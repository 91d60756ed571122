//! Ray-sphere intersection (quadratic equation).

use sculpt_math::{solve_quadratic, QuadraticRoots};
use sculpt_primitive::{Ray, Sphere};

use super::RayHit;

/// Intersect a ray with a sphere.
///
/// Solves `|origin + t * direction - center|^2 = r^2`. A tangent ray gives
/// its single root; otherwise the smaller root is returned. The result is
/// not clamped to `t >= 0`, so a ray starting inside the sphere reports the
/// crossing behind its origin. Callers wanting forward hits check `t`.
pub fn intersect_ray_sphere(ray: &Ray, sphere: &Sphere) -> Option<RayHit> {
    let d = ray.direction;
    let v = ray.origin - sphere.center;

    let t = match solve_quadratic(d.dot(&d), 2.0 * d.dot(&v), v.dot(&v) - sphere.radius_sqr()) {
        QuadraticRoots::None => return None,
        QuadraticRoots::One(s) => s,
        QuadraticRoots::Two(s1, s2) => s1.min(s2),
    };

    Some(RayHit::new(t, ray.point_at(t)))
}
