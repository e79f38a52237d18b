use thiserror::Error;

/// Configuration for the backtracking line search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    initial_step: f64,
    contraction: f64,
    sufficient_decrease: f64,
    max_retries: usize,
}

/// Errors that can occur when validating a line search config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("initial_step must be finite and positive")]
    InitialStep,

    #[error("contraction must lie strictly between 0 and 1")]
    Contraction,

    #[error("sufficient_decrease must lie strictly between 0 and 1")]
    SufficientDecrease,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(0.05, 0.5, 0.5, 100).unwrap()
    }
}

impl Config {
    /// Creates a new config with validated parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if `initial_step` is not finite and positive, or if
    /// `contraction` or `sufficient_decrease` lies outside `(0, 1)`.
    pub fn new(
        initial_step: f64,
        contraction: f64,
        sufficient_decrease: f64,
        max_retries: usize,
    ) -> Result<Self, ConfigError> {
        if !initial_step.is_finite() || initial_step <= 0.0 {
            return Err(ConfigError::InitialStep);
        }
        if !(contraction > 0.0 && contraction < 1.0) {
            return Err(ConfigError::Contraction);
        }
        if !(sufficient_decrease > 0.0 && sufficient_decrease < 1.0) {
            return Err(ConfigError::SufficientDecrease);
        }

        Ok(Self {
            initial_step,
            contraction,
            sufficient_decrease,
            max_retries,
        })
    }

    /// Returns the first trial step of every search.
    #[must_use]
    pub fn initial_step(&self) -> f64 {
        self.initial_step
    }

    /// Returns the factor applied to the trial step after each rejection.
    #[must_use]
    pub fn contraction(&self) -> f64 {
        self.contraction
    }

    /// Returns the constant `c` in `f(y - a·g) <= f(y) - c·a·g²`.
    #[must_use]
    pub fn sufficient_decrease(&self) -> f64 {
        self.sufficient_decrease
    }

    /// Returns the number of shrinks allowed before giving up.
    #[must_use]
    pub fn max_retries(&self) -> usize {
        self.max_retries
    }
}
