use crate::Iterates;

/// The result of a gradient or accelerated gradient run.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Every iterate produced, starting with `x0`.
    pub iterates: Iterates,

    /// Number of update steps performed.
    pub iters: usize,
}
