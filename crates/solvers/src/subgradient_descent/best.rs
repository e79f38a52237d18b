use crate::Point;

/// Tracks the point with the lowest objective seen so far.
///
/// Only strict improvements replace the stored point, so ties keep the
/// earliest.
#[derive(Debug, Clone, Copy)]
pub(super) struct Best {
    point: Point,
}

impl Best {
    pub(super) fn new(point: Point) -> Self {
        Self { point }
    }

    /// Replaces the best point if `candidate` strictly improves on it.
    pub(super) fn update(&mut self, candidate: Point) {
        if candidate.objective < self.point.objective {
            self.point = candidate;
        }
    }

    pub(super) fn point(&self) -> Point {
        self.point
    }
}
