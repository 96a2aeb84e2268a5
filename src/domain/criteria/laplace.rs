//! Laplace criterion - Bayes with equally likely states.

use super::bayes::expected_value;
use super::{Criterion, CriterionError, CriterionKind, CriterionResult};
use crate::domain::matrix::PayoffMatrix;

/// Scores each strategy as the mean of its payoffs (`Σ data[i][j] * 1/N`).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LaplaceCriterion;

impl LaplaceCriterion {
    pub fn new() -> Self {
        Self
    }

    /// The uniform probability vector for `states` states.
    pub fn uniform_probabilities(states: usize) -> Vec<f64> {
        vec![1.0 / states as f64; states]
    }
}

impl Criterion for LaplaceCriterion {
    fn kind(&self) -> CriterionKind {
        CriterionKind::Laplace
    }

    fn name(&self) -> String {
        self.kind().display_name().to_string()
    }

    fn calculate(&self, matrix: &PayoffMatrix) -> Result<CriterionResult, CriterionError> {
        let probabilities = Self::uniform_probabilities(matrix.state_count());
        expected_value(self.name(), self.kind(), &probabilities, matrix)
    }
}
