//! Ray-triangle intersection (single-sided Möller-Trumbore).

use sculpt_math::Tolerance;
use sculpt_primitive::{Ray, Triangle};

use super::RayHit;

/// Intersect a ray with the front face of a triangle.
///
/// Möller and Trumbore solve `origin + t * direction = v1 + b1 * e1 + b2 * e2`
/// with Cramer's rule, where `e1 = v2 - v1` and `e2 = v3 - v1`. The
/// determinant `(direction × e2) · e1` is positive only when the ray travels
/// against the winding normal `e1 × e2`. A determinant below `ε` therefore
/// rejects both near-parallel rays and back faces.
///
/// A hit requires `b1 >= 0`, `b2 >= 0`, `b1 + b2 <= 1` and `t >= 0`.
///
/// # References
///
/// Tomas Möller & Ben Trumbore (1997) Fast, Minimum Storage Ray-Triangle
/// Intersection, Journal of Graphics Tools, 2:1, 21-28.
pub fn intersect_ray_triangle(ray: &Ray, triangle: &Triangle) -> Option<RayHit> {
    let e1 = triangle.edge1();
    let e2 = triangle.edge2();

    let s1 = ray.direction.cross(&e2);
    let divisor = s1.dot(&e1);

    if divisor < Tolerance::EPSILON {
        return None;
    }

    let inv_divisor = 1.0 / divisor;
    let d = ray.origin - triangle.vertex1;
    let s2 = d.cross(&e1);
    let b1 = d.dot(&s1) * inv_divisor;
    let b2 = ray.direction.dot(&s2) * inv_divisor;
    let t = e2.dot(&s2) * inv_divisor;

    if b1 < 0.0 || b2 < 0.0 || b1 + b2 > 1.0 || t < 0.0 {
        return None;
    }

    Some(RayHit::new(t, ray.point_at(t)))
}
