use std::error::Error as StdError;

use thiserror::Error;

use crate::evaluate::EvalError;

/// Errors that can occur during a solver run.
///
/// A failed run returns no iterates; there is no partial result.
#[derive(Debug, Error)]
pub enum Error {
    #[error("non-finite starting point {0}")]
    NonFiniteStart(f64),

    #[error(transparent)]
    Evaluation(#[from] EvalError),

    /// The step-size strategy failed.
    ///
    /// The strategy's error is kept unmodified as the source and can be
    /// recovered with `downcast_ref`.
    #[error("step size failed at iteration {iter}")]
    StepSize {
        iter: usize,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    #[error("non-finite step size {value} at iteration {iter}")]
    NonFiniteStep { iter: usize, value: f64 },

    #[error("non-finite iterate {value} at iteration {iter}")]
    NonFiniteIterate { iter: usize, value: f64 },
}

impl Error {
    pub(crate) fn step_size<E: StdError + Send + Sync + 'static>(iter: usize, err: E) -> Self {
        Self::StepSize {
            iter,
            source: Box::new(err),
        }
    }
}
