#![warn(missing_docs)]

//! Primitive value types for sculpt geometry queries.
//!
//! Every primitive is a small `Copy` value that owns its data. Predicates in
//! `sculpt-intersect` take them by reference and never mutate them.
//!
//! - [`Sphere`] - center and radius
//! - [`Plane`] - point on the plane and unit normal
//! - [`Ray`] - origin and direction, parametrized as `origin + t * direction`
//! - [`Triangle`] - three vertices; winding defines the front face
//! - [`AaBox`] - axis-aligned box given by its minimum and maximum corners
//!
//! The plain `new` constructors trust their input. The `try_new` variants
//! validate it and report a [`PrimitiveError`].

mod aabox;
pub mod error;
mod plane;
mod ray;
mod sphere;
mod triangle;

pub use aabox::AaBox;
pub use error::{PrimitiveError, Result};
pub use plane::Plane;
pub use ray::Ray;
pub use sphere::Sphere;
pub use triangle::Triangle;

use sculpt_math::{Point3, Vec3};

pub(crate) fn point_is_finite(p: &Point3) -> bool {
    p.x.is_finite() && p.y.is_finite() && p.z.is_finite()
}

pub(crate) fn vec_is_finite(v: &Vec3) -> bool {
    v.x.is_finite() && v.y.is_finite() && v.z.is_finite()
}
