//! Nearest-hit accumulator.

use sculpt_math::Point3;

use crate::RayHit;

/// Closest hit seen so far across a sequence of candidate tests.
///
/// Owned by a single traversal. Parallel traversals keep one accumulator per
/// task and combine them with [`Intersection::min`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Intersection {
    hit: Option<(f32, Point3)>,
}

impl Intersection {
    /// An accumulator with no hit recorded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a candidate hit at `distance` and `position`.
    ///
    /// Accepted (returns `true`) if nothing is recorded yet or `distance` is
    /// strictly smaller than the recorded one. A candidate at the same
    /// distance is rejected, so the first-found hit wins ties.
    pub fn update(&mut self, distance: f32, position: Point3) -> bool {
        let accept = match self.hit {
            None => true,
            Some((current, _)) => distance < current,
        };
        if accept {
            self.hit = Some((distance, position));
        }
        accept
    }

    /// [`update`](Self::update) with a ray hit's parameter and point.
    pub fn update_with_hit(&mut self, hit: &RayHit) -> bool {
        self.update(hit.t, hit.point)
    }

    /// Forget the recorded hit.
    pub fn reset(&mut self) {
        self.hit = None;
    }

    /// Whether a hit has been recorded.
    pub fn is_hit(&self) -> bool {
        self.hit.is_some()
    }

    /// Distance of the recorded hit.
    pub fn distance(&self) -> Option<f32> {
        self.hit.map(|(d, _)| d)
    }

    /// Position of the recorded hit.
    pub fn position(&self) -> Option<Point3> {
        self.hit.map(|(_, p)| p)
    }

    /// The closer of two accumulators.
    ///
    /// `a` wins if it has a hit and `b` has none or is strictly farther;
    /// otherwise `b` wins, including on ties.
    pub fn min(a: &Self, b: &Self) -> Self {
        match (a.hit, b.hit) {
            (Some((da, _)), Some((db, _))) if da < db => *a,
            (Some(_), None) => *a,
            _ => *b,
        }
    }
}

impl From<RayHit> for Intersection {
    fn from(hit: RayHit) -> Self {
        Self {
            hit: Some((hit.t, hit.point)),
        }
    }
}
