use std::convert::Infallible;

use descent_core::{HistoryContext, IterationContext, PointContext, StepSize};

/// A fixed step size, usable with every solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constant(pub f64);

impl StepSize<IterationContext> for Constant {
    type Error = Infallible;

    fn step_size(&self, _context: &IterationContext) -> Result<f64, Self::Error> {
        Ok(self.0)
    }
}

impl StepSize<PointContext> for Constant {
    type Error = Infallible;

    fn step_size(&self, _context: &PointContext) -> Result<f64, Self::Error> {
        Ok(self.0)
    }
}

impl StepSize<HistoryContext> for Constant {
    type Error = Infallible;

    fn step_size(&self, _context: &HistoryContext) -> Result<f64, Self::Error> {
        Ok(self.0)
    }
}
