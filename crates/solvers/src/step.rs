use descent_core::StepSize;

use crate::Error;

/// Rejects a non-finite starting point.
pub(crate) fn check_start(x0: f64) -> Result<(), Error> {
    if x0.is_finite() {
        Ok(())
    } else {
        Err(Error::NonFiniteStart(x0))
    }
}

/// Asks the strategy for a step size and rejects non-finite values.
pub(crate) fn step_size<C, S>(strategy: &S, context: &C, iter: usize) -> Result<f64, Error>
where
    S: StepSize<C>,
{
    let value = strategy
        .step_size(context)
        .map_err(|err| Error::step_size(iter, err))?;

    if !value.is_finite() {
        return Err(Error::NonFiniteStep { iter, value });
    }

    Ok(value)
}

/// Moves `x` against `gradient`: `x - step * gradient`.
pub(crate) fn descend(x: f64, step: f64, gradient: f64, iter: usize) -> Result<f64, Error> {
    finite_iterate(x - step * gradient, iter)
}

/// Rejects an iterate that overflowed.
pub(crate) fn finite_iterate(value: f64, iter: usize) -> Result<f64, Error> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::NonFiniteIterate { iter, value })
    }
}
