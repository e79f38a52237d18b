//! Subgradient descent for non-differentiable convex objectives.
//!
//! # Algorithm
//!
//! For `t = 0 .. iters - 1`:
//!
//! ```text
//! g       = subgradient(x_t)
//! step    = step({t, f(x_t), f(x_best), g})
//! x_{t+1} = x_t - step * g
//! x_best  = x_{t+1}    if f(x_{t+1}) < f(x_best)
//! ```
//!
//! Subgradient steps are not descent steps, so the iterates themselves may
//! increase the objective. The best point never gets worse, which is what
//! history-aware strategies such as [`Polyak`] rely on.
//!
//! The objective is evaluated once per iterate; `f(x_t)` and `f(x_best)` are
//! reused rather than recomputed.
//!
//! [`Polyak`]: crate::step_size::Polyak

mod best;
mod event;
mod solution;

pub use event::Event;
pub use solution::Solution;

use log::{debug, trace};

use descent_core::{HistoryContext, Observer, ScalarFn, StepSize};

use crate::{
    Error, Iterates, Point,
    evaluate::{Role, evaluate},
    step,
};

use best::Best;

/// Runs subgradient descent from `x0` for `iters` steps.
///
/// The observer receives an [`Event`] after each update step.
///
/// # Errors
///
/// Returns an error if `x0` is not finite, if the objective, subgradient, or
/// step-size strategy fails or returns a non-finite value, or if an update
/// overflows.
pub fn solve<F, G, S, Obs>(
    objective: &F,
    subgradient: &G,
    x0: f64,
    step_size: &S,
    iters: usize,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: ScalarFn,
    G: ScalarFn,
    S: StepSize<HistoryContext>,
    Obs: Observer<Event>,
{
    step::check_start(x0)?;
    debug!("subgradient descent: x0 = {x0}, iters = {iters}");

    let mut iterates = Iterates::start(x0, iters + 1);
    let mut current = Point::new(x0, evaluate(objective, Role::Objective, x0)?);
    let mut best = Best::new(current);

    for iter in 0..iters {
        let g = evaluate(subgradient, Role::Subgradient, current.x)?;
        let context = HistoryContext {
            iter,
            f_current: current.objective,
            f_best: best.point().objective,
            gradient: g,
        };
        let alpha = step::step_size(step_size, &context, iter)?;
        let x_next = step::descend(current.x, alpha, g, iter)?;
        let next = Point::new(x_next, evaluate(objective, Role::Objective, x_next)?);

        best.update(next);
        trace!(
            "iter {iter}: x = {}, g = {g}, step = {alpha}, next = {x_next}, f_best = {}",
            current.x,
            best.point().objective,
        );

        iterates.push(x_next);

        let event = Event {
            iter,
            point: current,
            subgradient: g,
            step_size: alpha,
            next,
            best: best.point(),
        };
        observer.observe(&event);

        current = next;
    }

    let best = best.point();
    debug!(
        "subgradient descent finished: best x = {}, f = {}",
        best.x, best.objective
    );
    Ok(Solution {
        iterates,
        iters,
        best,
    })
}

/// Runs subgradient descent without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
///
/// # Errors
///
/// Returns an error if `x0` is not finite, if the objective, subgradient, or
/// step-size strategy fails or returns a non-finite value, or if an update
/// overflows.
pub fn solve_unobserved<F, G, S>(
    objective: &F,
    subgradient: &G,
    x0: f64,
    step_size: &S,
    iters: usize,
) -> Result<Solution, Error>
where
    F: ScalarFn,
    G: ScalarFn,
    S: StepSize<HistoryContext>,
{
    solve(objective, subgradient, x0, step_size, iters, ())
}
