use std::{ops::Index, slice};

use descent_core::ScalarFn;

use crate::evaluate::{EvalError, Role, evaluate};

/// The ordered output of a solver run.
///
/// Index 0 is always the caller-supplied starting point, and the sequence is
/// never empty. Only solvers append to it, so a sequence handed back to the
/// caller is final.
#[derive(Debug, Clone, PartialEq)]
pub struct Iterates(Vec<f64>);

impl Iterates {
    /// Starts a sequence at `x0`, reserving room for `len` entries.
    pub(crate) fn start(x0: f64, len: usize) -> Self {
        let mut xs = Vec::with_capacity(len);
        xs.push(x0);
        Self(xs)
    }

    pub(crate) fn push(&mut self, x: f64) {
        self.0.push(x);
    }

    /// Returns the starting point.
    #[must_use]
    pub fn initial(&self) -> f64 {
        self.0[0]
    }

    /// Returns the final iterate.
    #[must_use]
    pub fn last(&self) -> f64 {
        self.0[self.0.len() - 1]
    }

    /// Returns the number of iterates, including the starting point.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`: a sequence holds at least its starting point.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn iter(&self) -> slice::Iter<'_, f64> {
        self.0.iter()
    }

    /// Yields consecutive pairs `(x_t, x_{t+1})`, one per update step.
    pub fn steps(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.0.windows(2).map(|pair| (pair[0], pair[1]))
    }

    /// Evaluates `objective` along the sequence.
    ///
    /// This is the iteration-vs-value data a convergence plot draws.
    ///
    /// # Errors
    ///
    /// Returns the first evaluation failure.
    pub fn objective_values<F: ScalarFn>(&self, objective: &F) -> Result<Vec<f64>, EvalError> {
        self.0
            .iter()
            .map(|&x| evaluate(objective, Role::Objective, x))
            .collect()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<f64> {
        self.0
    }
}

impl Index<usize> for Iterates {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

impl AsRef<[f64]> for Iterates {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a Iterates {
    type Item = &'a f64;
    type IntoIter = slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<Iterates> for Vec<f64> {
    fn from(iterates: Iterates) -> Self {
        iterates.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn sample() -> Iterates {
        let mut iterates = Iterates::start(1.0, 3);
        iterates.push(0.5);
        iterates.push(0.25);
        iterates
    }

    #[test]
    fn starts_with_initial_point() {
        let iterates = Iterates::start(3.0, 1);
        assert_eq!(iterates.len(), 1);
        assert!(!iterates.is_empty());
        assert_relative_eq!(iterates.initial(), 3.0);
        assert_relative_eq!(iterates.last(), 3.0);
    }

    #[test]
    fn steps_pair_consecutive_iterates() {
        let steps: Vec<_> = sample().steps().collect();
        assert_eq!(steps, vec![(1.0, 0.5), (0.5, 0.25)]);
    }

    #[test]
    fn objective_values_follow_sequence() {
        let square = |x: f64| x * x;
        let values = sample().objective_values(&square).unwrap();
        assert_eq!(values, vec![1.0, 0.25, 0.0625]);
    }

    #[test]
    fn objective_values_report_failures() {
        let log = |x: f64| (x - 0.5).ln();
        let err = sample().objective_values(&log).unwrap_err();
        assert_relative_eq!(err.x(), 0.5);
    }
}
