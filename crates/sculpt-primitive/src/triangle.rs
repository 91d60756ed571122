//! Triangle primitive.

use serde::{Deserialize, Serialize};
use sculpt_math::{component_max, component_min, max_component, Point3, Tolerance, Vec3};

use crate::{point_is_finite, AaBox, PrimitiveError, Result};

/// A triangle given by three vertices.
///
/// Vertex order matters: the front face is the side `edge1 × edge2` points
/// to (right-hand rule).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    /// First vertex.
    pub vertex1: Point3,
    /// Second vertex.
    pub vertex2: Point3,
    /// Third vertex.
    pub vertex3: Point3,
}

impl Triangle {
    /// Create a triangle from three vertices.
    pub fn new(vertex1: Point3, vertex2: Point3, vertex3: Point3) -> Self {
        Self {
            vertex1,
            vertex2,
            vertex3,
        }
    }

    /// Create a triangle, rejecting non-finite or collinear vertices.
    pub fn try_new(vertex1: Point3, vertex2: Point3, vertex3: Point3) -> Result<Self> {
        if ![vertex1, vertex2, vertex3].iter().all(point_is_finite) {
            log::debug!("rejected triangle with non-finite vertices");
            return Err(PrimitiveError::NonFinite("triangle"));
        }
        let tri = Self::new(vertex1, vertex2, vertex3);
        if tri.is_degenerate() {
            log::debug!("rejected degenerate triangle {vertex1:?} {vertex2:?} {vertex3:?}");
            return Err(PrimitiveError::DegenerateTriangle);
        }
        Ok(tri)
    }

    /// Vertices as an array, in winding order.
    pub fn vertices(&self) -> [Point3; 3] {
        [self.vertex1, self.vertex2, self.vertex3]
    }

    /// `vertex2 - vertex1`.
    #[inline]
    pub fn edge1(&self) -> Vec3 {
        self.vertex2 - self.vertex1
    }

    /// `vertex3 - vertex1`.
    #[inline]
    pub fn edge2(&self) -> Vec3 {
        self.vertex3 - self.vertex1
    }

    /// Unnormalized face normal, `edge1 × edge2`.
    ///
    /// Its length is twice the triangle's area.
    #[inline]
    pub fn normal(&self) -> Vec3 {
        self.edge1().cross(&self.edge2())
    }

    /// Centroid.
    pub fn center(&self) -> Point3 {
        Point3::from((self.vertex1.coords + self.vertex2.coords + self.vertex3.coords) / 3.0)
    }

    /// Largest extent of the triangle's bounding box along any axis.
    pub fn max_extent(&self) -> f32 {
        let max = component_max(
            &component_max(&self.vertex1.coords, &self.vertex2.coords),
            &self.vertex3.coords,
        );
        let min = component_min(
            &component_min(&self.vertex1.coords, &self.vertex2.coords),
            &self.vertex3.coords,
        );
        max_component(&(max - min))
    }

    /// Whether the vertices are (nearly) collinear.
    pub fn is_degenerate(&self) -> bool {
        Tolerance::is_zero_sqr(self.normal().norm_squared())
    }

    /// Axis-aligned bounds of the triangle.
    pub fn aabox(&self) -> AaBox {
        let mut bounds = AaBox::empty();
        for v in self.vertices() {
            bounds.include_point(&v);
        }
        bounds
    }

    /// The same triangle with opposite winding.
    pub fn flipped(&self) -> Self {
        Self::new(self.vertex1, self.vertex3, self.vertex2)
    }
}
