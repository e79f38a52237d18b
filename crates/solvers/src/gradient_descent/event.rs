/// Event emitted by the gradient descent solver after each update step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Zero-based iteration index.
    pub iter: usize,

    /// The iterate the step started from.
    pub x: f64,

    /// The gradient at `x`.
    pub gradient: f64,

    /// The step size used.
    pub step_size: f64,

    /// The new iterate, `x - step_size * gradient`.
    pub next: f64,
}
