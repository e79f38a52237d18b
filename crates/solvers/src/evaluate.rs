use std::{error::Error as StdError, fmt};

use thiserror::Error;

use descent_core::ScalarFn;

/// The part a [`ScalarFn`] plays in a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Objective,
    Gradient,
    Subgradient,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Objective => "objective",
            Self::Gradient => "gradient",
            Self::Subgradient => "subgradient",
        };
        f.write_str(name)
    }
}

/// Errors that can occur when evaluating a [`ScalarFn`].
#[derive(Debug, Error)]
pub enum EvalError {
    /// The callable returned an error.
    #[error("{role} failed at x = {x}")]
    Failed {
        role: Role,
        x: f64,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    /// The callable returned NaN or an infinity.
    #[error("{role} returned non-finite value {value} at x = {x}")]
    NonFinite { role: Role, x: f64, value: f64 },
}

impl EvalError {
    /// Returns the role of the callable that failed.
    #[must_use]
    pub fn role(&self) -> Role {
        match self {
            Self::Failed { role, .. } | Self::NonFinite { role, .. } => *role,
        }
    }

    /// Returns the point at which evaluation failed.
    #[must_use]
    pub fn x(&self) -> f64 {
        match self {
            Self::Failed { x, .. } | Self::NonFinite { x, .. } => *x,
        }
    }
}

/// Evaluates `function` at `x`, rejecting non-finite results.
///
/// # Errors
///
/// Returns [`EvalError::Failed`] if the call fails and
/// [`EvalError::NonFinite`] if it returns NaN or an infinity.
pub fn evaluate<F: ScalarFn>(function: &F, role: Role, x: f64) -> Result<f64, EvalError> {
    let value = function.eval(x).map_err(|err| EvalError::Failed {
        role,
        x,
        source: Box::new(err),
    })?;

    if !value.is_finite() {
        return Err(EvalError::NonFinite { role, x, value });
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[derive(Debug, Error)]
    #[error("unreachable region")]
    struct Unreachable;

    struct Fails;

    impl ScalarFn for Fails {
        type Error = Unreachable;

        fn eval(&self, _x: f64) -> Result<f64, Self::Error> {
            Err(Unreachable)
        }
    }

    #[test]
    fn finite_values_pass_through() {
        let cube = |x: f64| x.powi(3);
        let value = evaluate(&cube, Role::Objective, 2.0).unwrap();
        assert_relative_eq!(value, 8.0);
    }

    #[test]
    fn failures_keep_their_source() {
        let err = evaluate(&Fails, Role::Gradient, 1.5).unwrap_err();

        assert_eq!(err.role(), Role::Gradient);
        assert_relative_eq!(err.x(), 1.5);
        let source = err.source().expect("has source");
        assert!(source.downcast_ref::<Unreachable>().is_some());
    }

    #[test]
    fn non_finite_values_are_rejected() {
        let reciprocal = |x: f64| 1.0 / x;
        let err = evaluate(&reciprocal, Role::Subgradient, 0.0).unwrap_err();

        assert!(matches!(
            err,
            EvalError::NonFinite { role: Role::Subgradient, value, .. } if value.is_infinite()
        ));
    }

    #[test]
    fn role_names_display() {
        assert_eq!(Role::Objective.to_string(), "objective");
        assert_eq!(Role::Subgradient.to_string(), "subgradient");
    }
}
