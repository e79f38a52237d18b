/// Event emitted by the accelerated gradient solver after each update step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Zero-based iteration index.
    pub iter: usize,

    /// The extrapolated query point `y_t`.
    pub y: f64,

    /// The gradient at `y`.
    pub gradient: f64,

    /// The step size used.
    pub step_size: f64,

    /// The new plain iterate `x_{t+1}`.
    pub x_next: f64,

    /// The momentum coefficient `β_t`.
    pub momentum: f64,

    /// The next query point `y_{t+1}`. Unchecked on the final step, where
    /// it may be non-finite since it is never queried.
    pub y_next: f64,
}
