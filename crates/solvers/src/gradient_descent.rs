//! Gradient descent with a per-iteration step size.
//!
//! # Algorithm
//!
//! ```text
//! x_{t+1} = x_t - step(t) * gradient(x_t)    for t = 0 .. iters - 1
//! ```
//!
//! There is no convergence check: the solver always consumes its full budget
//! and returns `iters + 1` iterates.

mod event;

pub use event::Event;

use log::{debug, trace};

use descent_core::{IterationContext, Observer, ScalarFn, StepSize};

use crate::{
    Error, Iterates, Solution,
    evaluate::{Role, evaluate},
    step,
};

/// Runs gradient descent from `x0` for `iters` steps.
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
    S: StepSize<IterationContext>,
    Obs: Observer<Event>,
{
    step::check_start(x0)?;
    debug!("gradient descent: x0 = {x0}, iters = {iters}");

    let mut iterates = Iterates::start(x0, iters + 1);
    let mut x = x0;

    for iter in 0..iters {
        let g = evaluate(gradient, Role::Gradient, x)?;
        let alpha = step::step_size(step_size, &IterationContext { iter }, iter)?;
        let next = step::descend(x, alpha, g, iter)?;
        trace!("iter {iter}: x = {x}, g = {g}, step = {alpha}, next = {next}");

        iterates.push(next);

        let event = Event {
            iter,
            x,
            gradient: g,
            step_size: alpha,
            next,
        };
        observer.observe(&event);

        x = next;
    }

    debug!("gradient descent finished at x = {x}");
    Ok(Solution { iterates, iters })
}

/// Runs gradient descent without observation.
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
    S: StepSize<IterationContext>,
{
    solve(gradient, x0, step_size, iters, ())
}
