use thiserror::Error;

use crate::evaluate::EvalError;

/// Errors that can occur during a backtracking line search.
#[derive(Debug, Error)]
pub enum Error {
    /// No trial step met the sufficient-decrease condition.
    #[error("no sufficient decrease after {retries} shrinks (last trial step {last_step})")]
    NonConvergence { retries: usize, last_step: f64 },

    #[error(transparent)]
    Evaluation(#[from] EvalError),
}
