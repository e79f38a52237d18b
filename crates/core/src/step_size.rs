//! The step-size capability and the contexts strategies read from.
//!
//! Each solver hands its strategy a different context:
//!
//! - [`IterationContext`] — the iteration index only
//! - [`PointContext`] — the query point and its gradient (line search)
//! - [`HistoryContext`] — the index, current and best objective values,
//!   and the subgradient (Polyak-style rules)

use std::convert::Infallible;

/// Computes a scalar step size from a context of type `C`.
///
/// Strategies hold only immutable configuration. Any trial value a strategy
/// needs while computing a step is local to that call, so a single strategy
/// may be shared across concurrent runs.
pub trait StepSize<C> {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns the step size for the given context.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if a step size cannot be determined.
    fn step_size(&self, context: &C) -> Result<f64, Self::Error>;
}

/// Index-only context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IterationContext {
    /// Zero-based iteration index.
    pub iter: usize,
}

/// Point-gradient context.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointContext {
    /// The point the step starts from.
    pub point: f64,

    /// The gradient at `point`.
    pub gradient: f64,
}

/// History-aware context.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistoryContext {
    /// Zero-based iteration index.
    pub iter: usize,

    /// Objective value at the current iterate.
    pub f_current: f64,

    /// Lowest objective value seen so far.
    pub f_best: f64,

    /// The (sub)gradient at the current iterate.
    pub gradient: f64,
}

impl<F> StepSize<IterationContext> for F
where
    F: Fn(usize) -> f64,
{
    type Error = Infallible;

    fn step_size(&self, context: &IterationContext) -> Result<f64, Self::Error> {
        Ok(self(context.iter))
    }
}

impl<F> StepSize<PointContext> for F
where
    F: Fn(f64, f64) -> f64,
{
    type Error = Infallible;

    fn step_size(&self, context: &PointContext) -> Result<f64, Self::Error> {
        Ok(self(context.point, context.gradient))
    }
}

impl<F> StepSize<HistoryContext> for F
where
    F: Fn(&HistoryContext) -> f64,
{
    type Error = Infallible;

    fn step_size(&self, context: &HistoryContext) -> Result<f64, Self::Error> {
        Ok(self(context))
    }
}
