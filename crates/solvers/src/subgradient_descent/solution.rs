use crate::{Iterates, Point};

/// The result of a subgradient descent run.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Every iterate produced, starting with `x0`.
    pub iterates: Iterates,

    /// Number of update steps performed.
    pub iters: usize,

    /// The iterate with the lowest objective, earliest on ties.
    pub best: Point,
}
