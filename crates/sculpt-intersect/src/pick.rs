//! Candidate reduction for picking and brush selection.
//!
//! A spatial index hands over candidate primitives; these helpers run the
//! matching predicate on each and reduce the outcomes. Parallel variants
//! keep one [`Intersection`] per rayon task and merge them with
//! [`Intersection::min`].

use rayon::prelude::*;
use sculpt_primitive::{AaBox, Ray, Sphere, Triangle};

use crate::intersect::{intersect_ray_triangle, ray_aabox_interval, sphere_intersects_triangle};
use crate::Intersection;

/// Closest front-face hit of `ray` among `triangles`.
///
/// Candidates at equal `t` keep the earliest one in slice order.
pub fn nearest_ray_triangle(ray: &Ray, triangles: &[Triangle]) -> Intersection {
    let mut nearest = Intersection::new();
    for triangle in triangles {
        if let Some(hit) = intersect_ray_triangle(ray, triangle) {
            if nearest.update_with_hit(&hit) {
                log::trace!("ray pick: closer hit at t={}", hit.t);
            }
        }
    }
    log::trace!(
        "ray pick: {} candidates, hit={}",
        triangles.len(),
        nearest.is_hit()
    );
    nearest
}

/// Parallel version of [`nearest_ray_triangle`].
///
/// The nearest distance matches the sequential result. On exact ties the
/// chosen position may differ, since task boundaries decide the order in
/// which partial results are merged.
pub fn par_nearest_ray_triangle(ray: &Ray, triangles: &[Triangle]) -> Intersection {
    let nearest = triangles
        .par_iter()
        .fold(Intersection::new, |mut acc, triangle| {
            if let Some(hit) = intersect_ray_triangle(ray, triangle) {
                acc.update_with_hit(&hit);
            }
            acc
        })
        .reduce(Intersection::new, |a, b| Intersection::min(&a, &b));
    log::trace!(
        "parallel ray pick: {} candidates, hit={}",
        triangles.len(),
        nearest.is_hit()
    );
    nearest
}

/// Indices of the triangles that overlap `sphere`, in slice order.
pub fn triangles_in_sphere(sphere: &Sphere, triangles: &[Triangle]) -> Vec<usize> {
    let selected: Vec<usize> = triangles
        .iter()
        .enumerate()
        .filter(|(_, triangle)| sphere_intersects_triangle(sphere, triangle))
        .map(|(i, _)| i)
        .collect();
    log::trace!(
        "sphere selection: {} of {} triangles",
        selected.len(),
        triangles.len()
    );
    selected
}

/// Indices of the boxes hit by `ray`, nearest entry first.
///
/// Used to order subtree descent so that closer nodes are visited first.
pub fn aaboxes_hit_by_ray(ray: &Ray, boxes: &[AaBox]) -> Vec<usize> {
    let mut hits: Vec<(usize, f32)> = boxes
        .iter()
        .enumerate()
        .filter_map(|(i, aabox)| ray_aabox_interval(ray, aabox).map(|(t_min, _)| (i, t_min)))
        .collect();
    hits.sort_by(|a, b| a.1.total_cmp(&b.1));
    hits.into_iter().map(|(i, _)| i).collect()
}
