//! Nesterov-style accelerated gradient.
//!
//! # Algorithm
//!
//! The solver keeps two sequences, plain iterates `x` and extrapolated query
//! points `y`, both starting at `x0`. For `t = 0 ..= iters`:
//!
//! ```text
//! g       = gradient(y_t)
//! x_{t+1} = y_t - step(y_t, g) * g
//! β_t     = (t - 1) / (t + 2)
//! y_{t+1} = x_{t+1} + β_t * (x_{t+1} - x_t)
//! ```
//!
//! The loop bound is inclusive, so a run performs `iters + 1` updates and
//! returns `iters + 2` iterates, one more than [`gradient_descent`] for the
//! same budget. `β_0` is negative.
//!
//! The step-size strategy reads the query point and its gradient, so a
//! [`backtracking::LineSearch`] can be used here.
//!
//! [`gradient_descent`]: crate::gradient_descent
//! [`backtracking::LineSearch`]: crate::step_size::backtracking::LineSearch

mod event;

pub use event::Event;

use log::{debug, trace};

use descent_core::{Observer, PointContext, ScalarFn, StepSize};

use crate::{
    Error, Iterates, Solution,
    evaluate::{Role, evaluate},
    step,
};

/// Returns the momentum coefficient `β_t = (t - 1) / (t + 2)`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn momentum(iter: usize) -> f64 {
    let t = iter as f64;
    (t - 1.0) / (t + 2.0)
}

/// Runs accelerated gradient from `x0` for `iters + 1` updates.
///
/// The observer receives an [`Event`] after each update step.
///
/// # Errors
///
/// Returns an error if `x0` is not finite, if the gradient or step-size
/// strategy fails or returns a non-finite value, or if an update overflows.
pub fn solve<G, S, Obs>(
    gradient: &G,
    x0: f64,
    step_size: &S,
    iters: usize,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    G: ScalarFn,
    S: StepSize<PointContext>,
    Obs: Observer<Event>,
{
    step::check_start(x0)?;
    debug!("accelerated gradient: x0 = {x0}, iters = {iters}");

    let mut iterates = Iterates::start(x0, iters + 2);
    let mut x = x0;
    let mut y = x0;

    for iter in 0..=iters {
        let g = evaluate(gradient, Role::Gradient, y)?;
        let context = PointContext {
            point: y,
            gradient: g,
        };
        let alpha = step::step_size(step_size, &context, iter)?;
        let x_next = step::descend(y, alpha, g, iter)?;

        let momentum = momentum(iter);
        let mut y_next = x_next + momentum * (x_next - x);
        if iter < iters {
            y_next = step::finite_iterate(y_next, iter)?;
        }
        trace!("iter {iter}: y = {y}, g = {g}, step = {alpha}, x = {x_next}, y' = {y_next}");

        iterates.push(x_next);

        let event = Event {
            iter,
            y,
            gradient: g,
            step_size: alpha,
            x_next,
            momentum,
            y_next,
        };
        observer.observe(&event);

        x = x_next;
        y = y_next;
    }

    debug!("accelerated gradient finished at x = {x}");
    Ok(Solution {
        iterates,
        iters: iters + 1,
    })
}

/// Runs accelerated gradient without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
///
/// # Errors
///
/// Returns an error if `x0` is not finite, if the gradient or step-size
/// strategy fails or returns a non-finite value, or if an update overflows.
pub fn solve_unobserved<G, S>(
    gradient: &G,
    x0: f64,
    step_size: &S,
    iters: usize,
) -> Result<Solution, Error>
where
    G: ScalarFn,
    S: StepSize<PointContext>,
{
    solve(gradient, x0, step_size, iters, ())
}
