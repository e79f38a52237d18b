use crate::Point;

/// Event emitted by the subgradient solver after each update step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Zero-based iteration index.
    pub iter: usize,

    /// The iterate the step started from, with its objective.
    pub point: Point,

    /// The subgradient at `point`.
    pub subgradient: f64,

    /// The step size used.
    pub step_size: f64,

    /// The new iterate, with its objective.
    pub next: Point,

    /// The best point after this step.
    pub best: Point,
}
