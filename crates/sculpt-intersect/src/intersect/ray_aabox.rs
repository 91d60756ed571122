//! Ray-box intersection (slab method).

use sculpt_primitive::{AaBox, Ray};

/// Entry and exit parameters of a ray through a box.
///
/// Returns `Some((t_min, t_max))` when the ray's line crosses all three slabs
/// with `t_max >= 0` and `t_min <= t_max`. `t_min` is not clamped, so it is
/// negative when the origin lies inside the box.
///
/// Boxes are closed: a ray running inside a face plane hits the box, so a ray
/// along a face shared by two boxes hits both.
#[inline]
pub fn ray_aabox_interval(ray: &Ray, aabox: &AaBox) -> Option<(f32, f32)> {
    let inv_dir = ray.inv_direction();
    let lower = (aabox.min - ray.origin).component_mul(&inv_dir);
    let upper = (aabox.max - ray.origin).component_mul(&inv_dir);

    let mut t_min = f32::NEG_INFINITY;
    let mut t_max = f32::INFINITY;
    for (&lo, &hi) in lower.iter().zip(upper.iter()) {
        let (near, far) = slab(lo, hi);
        t_min = t_min.max(near);
        t_max = t_max.min(far);
    }

    if t_max < 0.0 || t_min > t_max {
        None
    } else {
        Some((t_min, t_max))
    }
}

/// Ordered entry and exit of the ray's line through one slab.
///
/// A zero direction component gives an infinite reciprocal. With the origin
/// on one of the slab planes the product is `0 * inf = NaN`; the origin is then
/// inside the closed slab and the axis puts no bound on `t`.
#[inline]
fn slab(lower: f32, upper: f32) -> (f32, f32) {
    if lower.is_nan() || upper.is_nan() {
        (f32::NEG_INFINITY, f32::INFINITY)
    } else if upper < lower {
        (upper, lower)
    } else {
        (lower, upper)
    }
}

/// Whether a ray hits a box.
#[inline]
pub fn ray_intersects_aabox(ray: &Ray, aabox: &AaBox) -> bool {
    ray_aabox_interval(ray, aabox).is_some()
}
