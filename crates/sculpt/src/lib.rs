#![warn(missing_docs)]

//! Geometry intersection queries for mesh sculpting.
//!
//! Facade over the sculpt crates: primitive value types, pairwise
//! intersection predicates and the nearest-hit [`Intersection`] accumulator.
//!
//! # Example
//!
//! ```
//! use sculpt::prelude::*;
//!
//! let brush = Sphere::new(Point3::new(0.0, 0.0, 0.5), 1.0);
//! let face = Triangle::new(
//!     Point3::new(-1.0, -1.0, 0.0),
//!     Point3::new(1.0, -1.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//! );
//! assert!(sphere_intersects_triangle(&brush, &face));
//! ```

pub use sculpt_intersect;
pub use sculpt_math;
pub use sculpt_primitive;

pub use sculpt_intersect::{intersect, pick, Intersection, RayHit};
pub use sculpt_math::{Point3, Tolerance, Vec3};
pub use sculpt_primitive::{AaBox, Plane, PrimitiveError, Ray, Sphere, Triangle};

/// Everything needed to run queries, in one import.
pub mod prelude {
    pub use sculpt_intersect::intersect::*;
    pub use sculpt_intersect::pick::*;
    pub use sculpt_intersect::{Intersection, RayHit};
    pub use sculpt_math::{Point3, Tolerance, Vec3};
    pub use sculpt_primitive::{AaBox, Plane, Ray, Sphere, Triangle};
}
