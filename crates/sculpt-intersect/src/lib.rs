#![warn(missing_docs)]

//! Intersection predicates and nearest-hit accumulation for sculpt.
//!
//! The spatial index feeds candidate primitives to these tests; the picking
//! and sculpting tools turn the results into positions and selections.
//!
//! # Architecture
//!
//! - [`intersect`] - one predicate per primitive pair
//! - [`RayHit`] - ray parameter and point of a successful ray query
//! - [`Intersection`] - accumulator that keeps the closest hit across queries
//! - [`pick`] - sequential and rayon-parallel reduction over candidates
//!
//! # Example
//!
//! ```
//! use sculpt_intersect::{intersect::intersect_ray_triangle, Intersection};
//! use sculpt_math::{Point3, Vec3};
//! use sculpt_primitive::{Ray, Triangle};
//!
//! let tri = Triangle::new(
//!     Point3::new(-1.0, -1.0, 0.0),
//!     Point3::new(1.0, -1.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//! );
//! let ray = Ray::new(Point3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
//!
//! let mut nearest = Intersection::new();
//! if let Some(hit) = intersect_ray_triangle(&ray, &tri) {
//!     nearest.update_with_hit(&hit);
//! }
//! assert_eq!(nearest.distance(), Some(5.0));
//! ```

pub mod intersect;
mod intersection;
pub mod pick;

pub use intersect::RayHit;
pub use intersection::Intersection;
