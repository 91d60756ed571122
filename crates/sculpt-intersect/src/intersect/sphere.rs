//! Sphere queries against points, segments, triangles and boxes.

use sculpt_math::{solve_quadratic, Point3};
use sculpt_primitive::{AaBox, Sphere, Triangle};

/// Whether `point` lies inside or on the sphere.
///
/// Compares squared distances, so no square root is taken.
#[inline]
pub fn sphere_contains_point(sphere: &Sphere, point: &Point3) -> bool {
    let d = point - sphere.center;
    d.dot(&d) <= sphere.radius_sqr()
}

/// Whether any point of the closed segment `[v1, v2]` lies within the sphere.
///
/// The segment `v1 + s * (v2 - v1)` is intersected with the sphere surface.
/// With no real root the supporting line misses the sphere. Otherwise the
/// segment is rejected only if every root lies before `s = 0` or every root
/// lies after `s = 1`; a segment entirely inside the sphere is accepted.
///
/// `v1 != v2` is a caller precondition.
pub fn sphere_intersects_segment(sphere: &Sphere, v1: &Point3, v2: &Point3) -> bool {
    let l = v2 - v1;
    let lsqr = l.dot(&l);
    debug_assert!(lsqr > 0.0, "degenerate segment");

    let v1o = v1 - sphere.center;
    let roots = solve_quadratic(lsqr, 2.0 * l.dot(&v1o), v1o.dot(&v1o) - sphere.radius_sqr());

    if roots.count() == 0 {
        return false;
    }
    let all_before = roots.iter().all(|s| s < 0.0);
    let all_after = roots.iter().all(|s| s > 1.0);
    !(all_before || all_after)
}

/// Whether the sphere and triangle overlap.
///
/// Separating-axis test over seven candidate axes, evaluated in the sphere's
/// local frame: the triangle plane, the three vertex regions and the three
/// edge regions. Edge feet are kept scaled by the squared edge length so no
/// division happens. The shapes overlap iff no axis separates them.
///
/// Based on <http://realtimecollisiondetection.net/blog/?p=103>.
///
/// The triangle must not be degenerate.
pub fn sphere_intersects_triangle(sphere: &Sphere, triangle: &Triangle) -> bool {
    debug_assert!(!triangle.is_degenerate(), "degenerate triangle");

    let a = triangle.vertex1 - sphere.center;
    let b = triangle.vertex2 - sphere.center;
    let c = triangle.vertex3 - sphere.center;
    let rr = sphere.radius_sqr();

    // Triangle plane.
    let v = (b - a).cross(&(c - a));
    let d = a.dot(&v);
    let e = v.dot(&v);
    let sep_plane = d * d > rr * e;

    // Vertex regions.
    let aa = a.dot(&a);
    let ab = a.dot(&b);
    let ac = a.dot(&c);
    let bb = b.dot(&b);
    let bc = b.dot(&c);
    let cc = c.dot(&c);
    let sep_a = (aa > rr) && (ab > aa) && (ac > aa);
    let sep_b = (bb > rr) && (ab > bb) && (bc > bb);
    let sep_c = (cc > rr) && (ac > cc) && (bc > cc);

    // Edge regions.
    let edge_ab = b - a;
    let edge_bc = c - b;
    let edge_ca = a - c;

    let d1 = ab - aa;
    let d2 = bc - bb;
    let d3 = ac - cc;
    let e1 = edge_ab.dot(&edge_ab);
    let e2 = edge_bc.dot(&edge_bc);
    let e3 = edge_ca.dot(&edge_ca);

    let q1 = a * e1 - edge_ab * d1;
    let q2 = b * e2 - edge_bc * d2;
    let q3 = c * e3 - edge_ca * d3;
    let qc = c * e1 - q1;
    let qa = a * e2 - q2;
    let qb = b * e3 - q3;

    let sep_ab = (q1.dot(&q1) > rr * e1 * e1) && (q1.dot(&qc) > 0.0);
    let sep_bc = (q2.dot(&q2) > rr * e2 * e2) && (q2.dot(&qa) > 0.0);
    let sep_ca = (q3.dot(&q3) > rr * e3 * e3) && (q3.dot(&qb) > 0.0);

    !(sep_plane || sep_a || sep_b || sep_c || sep_ab || sep_bc || sep_ca)
}

/// Whether the sphere and box overlap (touching counts).
pub fn sphere_intersects_aabox(sphere: &Sphere, aabox: &AaBox) -> bool {
    let c = sphere.center;
    let mut d = 0.0;

    for i in 0..3 {
        if c[i] < aabox.min[i] {
            let s = c[i] - aabox.min[i];
            d += s * s;
        } else if c[i] > aabox.max[i] {
            let s = c[i] - aabox.max[i];
            d += s * s;
        }
    }
    d <= sphere.radius_sqr()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use sculpt_math::Vec3;

    fn unit_sphere() -> Sphere {
        Sphere::new(Point3::origin(), 1.0)
    }

    fn right_triangle() -> Triangle {
        Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        )
    }

    #[test]
    fn test_point_inside_and_outside() {
        let s = unit_sphere();
        assert!(sphere_contains_point(&s, &Point3::new(0.5, 0.5, 0.0)));
        assert!(!sphere_contains_point(&s, &Point3::new(1.0, 1.0, 0.0)));
    }

    #[test]
    fn test_point_on_boundary_counts() {
        let s = Sphere::new(Point3::new(1.0, 1.0, 1.0), 2.0);
        assert!(sphere_contains_point(&s, &Point3::new(3.0, 1.0, 1.0)));
    }

    proptest! {
        #[test]
        fn prop_point_matches_squared_distance(
            cx in -10f32..10.0, cy in -10f32..10.0, cz in -10f32..10.0,
            r in 0f32..10.0,
            px in -10f32..10.0, py in -10f32..10.0, pz in -10f32..10.0,
        ) {
            let s = Sphere::new(Point3::new(cx, cy, cz), r);
            let p = Point3::new(px, py, pz);
            let expected = (p - s.center).norm_squared() <= r * r;
            prop_assert_eq!(sphere_contains_point(&s, &p), expected);
        }
    }

    #[test]
    fn test_segment_crossing() {
        let s = unit_sphere();
        assert!(sphere_intersects_segment(
            &s,
            &Point3::new(-2.0, 0.0, 0.0),
            &Point3::new(2.0, 0.0, 0.0)
        ));
    }

    #[test]
    fn test_segment_entirely_inside() {
        let s = unit_sphere();
        assert!(sphere_intersects_segment(
            &s,
            &Point3::new(-0.5, 0.0, 0.0),
            &Point3::new(0.5, 0.0, 0.0)
        ));
    }

    #[test]
    fn test_segment_half_inside() {
        let s = unit_sphere();
        assert!(sphere_intersects_segment(
            &s,
            &Point3::new(0.0, 0.0, 0.0),
            &Point3::new(0.0, 5.0, 0.0)
        ));
    }

    #[test]
    fn test_segment_before_and_after_sphere() {
        let s = unit_sphere();
        // Both roots negative: sphere lies behind v1.
        assert!(!sphere_intersects_segment(
            &s,
            &Point3::new(2.0, 0.0, 0.0),
            &Point3::new(3.0, 0.0, 0.0)
        ));
        // Both roots beyond 1: sphere lies past v2.
        assert!(!sphere_intersects_segment(
            &s,
            &Point3::new(-3.0, 0.0, 0.0),
            &Point3::new(-2.0, 0.0, 0.0)
        ));
    }

    #[test]
    fn test_segment_line_misses() {
        let s = unit_sphere();
        assert!(!sphere_intersects_segment(
            &s,
            &Point3::new(-2.0, 2.0, 0.0),
            &Point3::new(2.0, 2.0, 0.0)
        ));
    }

    #[test]
    fn test_segment_tangent() {
        let s = unit_sphere();
        assert!(sphere_intersects_segment(
            &s,
            &Point3::new(-1.0, 1.0, 0.0),
            &Point3::new(1.0, 1.0, 0.0)
        ));
    }

    #[test]
    fn test_triangle_sphere_at_centroid() {
        let tri = right_triangle();
        // Circumradius of the right triangle is half the hypotenuse.
        let circumradius = 2.0_f32.sqrt() / 2.0;
        let s = Sphere::new(tri.center(), circumradius + 0.1);
        assert!(sphere_intersects_triangle(&s, &tri));
    }

    #[test]
    fn test_triangle_small_sphere_in_plane() {
        let tri = right_triangle();
        let s = Sphere::new(Point3::new(0.25, 0.25, 0.0), 0.01);
        assert!(sphere_intersects_triangle(&s, &tri));
    }

    #[test]
    fn test_triangle_far_along_normal() {
        let tri = right_triangle();
        let s = Sphere::new(tri.center() + Vec3::new(0.0, 0.0, 5.0), 1.0);
        assert!(!sphere_intersects_triangle(&s, &tri));
        let below = Sphere::new(tri.center() - Vec3::new(0.0, 0.0, 5.0), 1.0);
        assert!(!sphere_intersects_triangle(&below, &tri));
    }

    #[test]
    fn test_triangle_above_face() {
        let tri = right_triangle();
        let center = Point3::new(0.25, 0.25, 0.5);
        assert!(!sphere_intersects_triangle(&Sphere::new(center, 0.4), &tri));
        assert!(sphere_intersects_triangle(&Sphere::new(center, 0.6), &tri));
    }

    #[test]
    fn test_triangle_vertex_region() {
        let tri = right_triangle();
        let center = Point3::new(-1.0, -1.0, 0.0);
        // Nearest feature is vertex (0,0,0) at distance sqrt(2).
        assert!(!sphere_intersects_triangle(&Sphere::new(center, 1.0), &tri));
        assert!(sphere_intersects_triangle(&Sphere::new(center, 1.5), &tri));
    }

    #[test]
    fn test_triangle_edge_region() {
        let tri = right_triangle();
        let center = Point3::new(0.5, -1.0, 0.0);
        // Nearest feature is the edge along the x axis at distance 1.
        assert!(!sphere_intersects_triangle(&Sphere::new(center, 0.9), &tri));
        assert!(sphere_intersects_triangle(&Sphere::new(center, 1.1), &tri));
    }

    #[test]
    fn test_triangle_hypotenuse_region() {
        let tri = right_triangle();
        // Distance from (1,1,0) to the hypotenuse x + y = 1 is 1/sqrt(2).
        let center = Point3::new(1.0, 1.0, 0.0);
        assert!(!sphere_intersects_triangle(&Sphere::new(center, 0.65), &tri));
        assert!(sphere_intersects_triangle(&Sphere::new(center, 0.75), &tri));
    }

    #[test]
    fn test_triangle_winding_does_not_matter() {
        let tri = right_triangle();
        let s = Sphere::new(Point3::new(0.25, 0.25, 0.3), 0.5);
        assert!(sphere_intersects_triangle(&s, &tri));
        assert!(sphere_intersects_triangle(&s, &tri.flipped()));
    }

    #[test]
    fn test_aabox_overlap() {
        let b = AaBox::new(Point3::new(-1.0, -1.0, -1.0), Point3::new(1.0, 1.0, 1.0));
        assert!(sphere_intersects_aabox(&Sphere::new(Point3::origin(), 0.1), &b));
        assert!(sphere_intersects_aabox(&Sphere::new(Point3::new(2.0, 0.0, 0.0), 1.0), &b));
        assert!(!sphere_intersects_aabox(&Sphere::new(Point3::new(2.0, 0.0, 0.0), 0.9), &b));
    }

    #[test]
    fn test_aabox_corner_region() {
        let b = AaBox::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0));
        // Distance to corner (1,1,1) is sqrt(3).
        let center = Point3::new(2.0, 2.0, 2.0);
        assert!(!sphere_intersects_aabox(&Sphere::new(center, 1.7), &b));
        assert!(sphere_intersects_aabox(&Sphere::new(center, 1.75), &b));
    }
}
