//! Scalar first-order optimization solvers.
//!
//! Each solver advances an iterate using a gradient (or subgradient) oracle
//! and a pluggable [`StepSize`] strategy, runs a fixed iteration budget, and
//! returns every iterate it produced.
//!
//! # Solvers
//!
//! - [`gradient_descent`] — `x_{t+1} = x_t - step(t)·∇f(x_t)`
//! - [`accelerated_gradient`] — Nesterov-style momentum over a plain and an
//!   extrapolated sequence; supports line search
//! - [`subgradient_descent`] — tracks the best point and exposes the objective
//!   history to the strategy
//!
//! # Step sizes
//!
//! See [`step_size`] for [`Constant`], [`backtracking::LineSearch`], and
//! [`Polyak`]. Plain closures work too.
//!
//! Runs share nothing, so independent runs (a parameter sweep, for example)
//! can execute concurrently without synchronization.
//!
//! [`StepSize`]: descent_core::StepSize
//! [`Constant`]: step_size::Constant
//! [`backtracking::LineSearch`]: step_size::backtracking::LineSearch
//! [`Polyak`]: step_size::Polyak

mod error;
mod evaluate;
mod iterates;
mod point;
mod solution;
mod step;

pub use error::Error;
pub use evaluate::{EvalError, Role, evaluate};
pub use iterates::Iterates;
pub use point::Point;
pub use solution::Solution;

pub mod accelerated_gradient;
pub mod gradient_descent;
pub mod step_size;
pub mod subgradient_descent;
