//! Backtracking line search.
//!
//! # Algorithm
//!
//! Starting from the configured initial step `a`, each call tests the
//! sufficient-decrease condition
//!
//! ```text
//! f(y - a·g) <= f(y) - c·a·g²
//! ```
//!
//! and multiplies `a` by the contraction `ρ ∈ (0, 1)` until it holds. The
//! search gives up with [`Error::NonConvergence`] after `max_retries` shrinks,
//! having made `max_retries + 1` trial evaluations.
//!
//! A trial step too small to move `y` in floating point is rejected unless
//! `g` is zero, so an unsatisfiable search always ends in `NonConvergence`.
//!
//! The trial step lives only for the duration of one call. A [`LineSearch`]
//! holds nothing but its objective and an immutable [`Config`].

mod config;
mod error;

pub use config::{Config, ConfigError};
pub use error::Error;

use log::trace;

use descent_core::{PointContext, ScalarFn, StepSize};

use crate::evaluate::{Role, evaluate};

/// A backtracking line search over an objective `F`.
#[derive(Debug, Clone)]
pub struct LineSearch<F> {
    objective: F,
    config: Config,
}

impl<F: ScalarFn> LineSearch<F> {
    /// Creates a line search over `objective`.
    pub fn new(objective: F, config: Config) -> Self {
        Self { objective, config }
    }

    /// Returns the search configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Finds a step along `-gradient` from `point`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonConvergence`] if no trial step is accepted within
    /// the retry budget, or [`Error::Evaluation`] if the objective fails or
    /// returns a non-finite value.
    pub fn search(&self, point: f64, gradient: f64) -> Result<f64, Error> {
        let f_point = evaluate(&self.objective, Role::Objective, point)?;
        let decrease = self.config.sufficient_decrease() * gradient * gradient;

        let mut step = self.config.initial_step();
        let mut shrinks = 0;

        loop {
            let trial = point - step * gradient;
            let f_trial = evaluate(&self.objective, Role::Objective, trial)?;

            // A trial that rounds back onto `point` only passes through rounding.
            let moved = trial != point || gradient == 0.0;
            if moved && f_trial <= f_point - decrease * step {
                return Ok(step);
            }

            if shrinks == self.config.max_retries() {
                return Err(Error::NonConvergence {
                    retries: shrinks,
                    last_step: step,
                });
            }

            step *= self.config.contraction();
            shrinks += 1;
            trace!("line search shrink {shrinks}: step = {step}");
        }
    }
}

impl<F> StepSize<PointContext> for LineSearch<F>
where
    F: ScalarFn,
{
    type Error = Error;

    fn step_size(&self, context: &PointContext) -> Result<f64, Self::Error> {
        self.search(context.point, context.gradient)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::Cell;

    use approx::assert_relative_eq;

    use crate::evaluate::EvalError;

    fn quartic(x: f64) -> f64 {
        x.powi(4)
    }

    #[test]
    fn accepts_initial_step_when_decrease_suffices() {
        let search = LineSearch::new(quartic, Config::default());

        // At x = 1: f(1 - 0.05·4) = 0.4096 <= 1 - 0.5·0.05·16 = 0.6
        let step = search.search(1.0, 4.0).unwrap();

        assert_relative_eq!(step, 0.05);
    }

    #[test]
    fn shrinks_until_decrease_suffices() {
        let config = Config::new(1.0, 0.5, 0.5, 20).unwrap();
        let search = LineSearch::new(|x: f64| x * x, config);

        // f(x) = x² at x = 1, g = 2. Accepts a once 1 - 4a + 4a² <= 1 - 2a,
        // i.e. a <= 0.5.
        let step = search.search(1.0, 2.0).unwrap();

        assert_relative_eq!(step, 0.5);
    }

    #[test]
    fn accepted_step_satisfies_condition() {
        let config = Config::new(2.0, 0.3, 0.25, 50).unwrap();
        let search = LineSearch::new(quartic, config);

        for point in [-2.0, -0.5, 0.3, 1.7] {
            let g = 4.0 * f64::powi(point, 3);
            let a = search.search(point, g).unwrap();
            let decrease = 0.25 * g * g;

            assert!(a > 0.0);
            assert!(quartic(point - a * g) <= quartic(point) - decrease * a);
        }
    }

    #[test]
    fn zero_gradient_accepts_immediately() {
        let search = LineSearch::new(quartic, Config::default());
        let step = search.search(1.0, 0.0).unwrap();
        assert_relative_eq!(step, 0.05);
    }

    #[test]
    fn fails_after_exact_retry_budget() {
        let evals = Cell::new(0);
        let objective = |x: f64| {
            evals.set(evals.get() + 1);
            x * x
        };

        let config = Config::new(0.05, 0.5, 0.5, 7).unwrap();
        let search = LineSearch::new(objective, config);

        // An uphill "gradient" at x = 1 can never produce a decrease.
        let err = search.search(1.0, -2.0).unwrap_err();

        match err {
            Error::NonConvergence { retries, last_step } => {
                assert_eq!(retries, 7);
                assert_relative_eq!(last_step, 0.05 * 0.5_f64.powi(7));
            }
            Error::Evaluation(e) => panic!("unexpected evaluation error: {e}"),
        }

        // One evaluation at the point, then one trial per attempt.
        assert_eq!(evals.get(), 1 + 8);
    }

    #[test]
    fn default_config_exhausts_retries_when_uphill() {
        let search = LineSearch::new(|x: f64| x * x, Config::default());

        // Trial points stop moving after ~50 shrinks; that must not count as
        // a sufficient decrease.
        let err = search.search(1.0, -2.0).unwrap_err();

        match err {
            Error::NonConvergence { retries, last_step } => {
                assert_eq!(retries, 100);
                assert_relative_eq!(last_step, 0.05 * 0.5_f64.powi(100));
            }
            Error::Evaluation(e) => panic!("unexpected evaluation error: {e}"),
        }
    }

    #[test]
    fn stalled_trial_is_rejected() {
        // A tiny gradient cannot move x = 1 at any trial step.
        let config = Config::new(0.05, 0.5, 0.5, 3).unwrap();
        let search = LineSearch::new(|x: f64| x * x, config);

        let err = search.search(1.0, 1e-30).unwrap_err();

        assert!(matches!(err, Error::NonConvergence { retries: 3, .. }));
    }

    #[test]
    fn zero_retries_tries_once() {
        let config = Config::new(0.05, 0.5, 0.5, 0).unwrap();
        let search = LineSearch::new(|x: f64| x * x, config);

        let err = search.search(1.0, -2.0).unwrap_err();

        assert!(matches!(err, Error::NonConvergence { retries: 0, .. }));
    }

    #[test]
    fn non_finite_objective_propagates() {
        let search = LineSearch::new(|x: f64| 1.0 / x, Config::default());

        let err = search.search(0.0, 1.0).unwrap_err();

        assert!(matches!(
            err,
            Error::Evaluation(EvalError::NonFinite {
                role: Role::Objective,
                ..
            })
        ));
    }

    #[test]
    fn works_as_point_strategy() {
        let search = LineSearch::new(quartic, Config::default());
        let context = PointContext {
            point: 1.0,
            gradient: 4.0,
        };

        let step = search.step_size(&context).unwrap();

        assert_relative_eq!(step, 0.05);
    }
}
