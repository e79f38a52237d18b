use std::convert::Infallible;

/// A scalar callable `f: ℝ → ℝ` evaluated by the solvers.
///
/// Objectives, gradients, and subgradients are all `ScalarFn`s. Implementations
/// must be deterministic, always producing the same result for a given `x`,
/// since solvers cache values rather than re-evaluating at a known point.
///
/// Any `Fn(f64) -> f64` closure is a `ScalarFn` that never fails.
/// Implement the trait directly when evaluation can fail.
pub trait ScalarFn {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the function at `x`.
    ///
    /// # Errors
    ///
    /// Each implementation defines its own `Error` type to represent
    /// domain-specific failures.
    fn eval(&self, x: f64) -> Result<f64, Self::Error>;
}

impl<F> ScalarFn for F
where
    F: Fn(f64) -> f64,
{
    type Error = Infallible;

    fn eval(&self, x: f64) -> Result<f64, Self::Error> {
        Ok(self(x))
    }
}
