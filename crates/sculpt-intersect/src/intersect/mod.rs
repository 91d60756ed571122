//! Pairwise intersection predicates.
//!
//! One function per primitive pair. Each is pure, allocation-free and
//! independent of the others apart from the shared quadratic solver.
//!
//! | query | result |
//! |-------|--------|
//! | sphere / point, segment, triangle, box | `bool` |
//! | ray / sphere, plane, triangle | `Option<RayHit>` |
//! | ray / box | `bool` or `Option<(t_min, t_max)>` |

mod ray_aabox;
mod ray_plane;
mod ray_sphere;
mod ray_triangle;
mod sphere;

pub use ray_aabox::{ray_aabox_interval, ray_intersects_aabox};
pub use ray_plane::intersect_ray_plane;
pub use ray_sphere::intersect_ray_sphere;
pub use ray_triangle::intersect_ray_triangle;
pub use sphere::{
    sphere_contains_point, sphere_intersects_aabox, sphere_intersects_segment,
    sphere_intersects_triangle,
};

use sculpt_math::Point3;

/// Result of a successful ray query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Parameter along the ray where the intersection occurs.
    pub t: f32,
    /// Intersection point, `origin + t * direction`.
    pub point: Point3,
}

impl RayHit {
    /// Create a new ray hit.
    pub fn new(t: f32, point: Point3) -> Self {
        Self { t, point }
    }
}
