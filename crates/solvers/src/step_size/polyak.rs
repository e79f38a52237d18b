use std::convert::Infallible;

use descent_core::{HistoryContext, StepSize};

/// Polyak-style step size with a diminishing perturbation.
///
/// ```text
/// step = (f_current - f_best + 1/(t+1)) / g²    if |g| > 0
/// step = 0                                      otherwise
/// ```
///
/// The `1/(t+1)` term keeps the step positive once the current iterate is
/// also the best one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Polyak;

impl StepSize<HistoryContext> for Polyak {
    type Error = Infallible;

    #[allow(clippy::cast_precision_loss)]
    fn step_size(&self, context: &HistoryContext) -> Result<f64, Self::Error> {
        let g = context.gradient;
        if g.abs() > 0.0 {
            let perturbation = 1.0 / (context.iter as f64 + 1.0);
            Ok((context.f_current - context.f_best + perturbation) / (g * g))
        } else {
            Ok(0.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn context(iter: usize, f_current: f64, f_best: f64, gradient: f64) -> HistoryContext {
        HistoryContext {
            iter,
            f_current,
            f_best,
            gradient,
        }
    }

    #[test]
    fn zero_gradient_gives_zero_step() {
        for (iter, f_current, f_best) in [(0, 1.0, 0.5), (7, 0.0, 0.0), (100, 3.0, -2.0)] {
            let step = Polyak
                .step_size(&context(iter, f_current, f_best, 0.0))
                .unwrap();
            assert_eq!(step, 0.0);
        }
    }

    #[test]
    fn first_step_uses_full_perturbation() {
        // f_current == f_best, so only 1/(t+1) = 1 remains.
        let step = Polyak.step_size(&context(0, 0.75, 0.75, 1.0)).unwrap();
        assert_relative_eq!(step, 1.0);
    }

    #[test]
    fn gap_and_gradient_scale_step() {
        // (0.5 - 0.25 + 1/4) / 2² = 0.125
        let step = Polyak.step_size(&context(3, 0.5, 0.25, -2.0)).unwrap();
        assert_relative_eq!(step, 0.125);
    }
}
