//! Bayes criterion - expected payoff under known state probabilities.

use super::{CalculationStep, Criterion, CriterionError, CriterionKind, CriterionResult, StepDetail};
use crate::domain::matrix::PayoffMatrix;

/// Scores each strategy as `Σ data[i][j] * p[j]` and picks the largest score.
///
/// The probabilities are used as given. Checking that they sum to 1 is the
/// caller's job, so already-validated inputs pass straight through.
#[derive(Debug, Clone, PartialEq)]
pub struct BayesCriterion {
    probabilities: Vec<f64>,
}

impl BayesCriterion {
    /// Creates the criterion, rejecting empty or non-finite probability vectors.
    pub fn new(probabilities: Vec<f64>) -> Result<Self, CriterionError> {
        if probabilities.is_empty() {
            return Err(CriterionError::invalid_parameter(
                CriterionKind::Bayes,
                "probability vector is empty",
            ));
        }
        if let Some(bad) = probabilities.iter().find(|p| !p.is_finite()) {
            return Err(CriterionError::invalid_parameter(
                CriterionKind::Bayes,
                format!("probability {} is not a finite number", bad),
            ));
        }
        Ok(Self { probabilities })
    }

    /// Returns the state probabilities.
    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }
}

impl Criterion for BayesCriterion {
    fn kind(&self) -> CriterionKind {
        CriterionKind::Bayes
    }

    fn name(&self) -> String {
        self.kind().display_name().to_string()
    }

    fn calculate(&self, matrix: &PayoffMatrix) -> Result<CriterionResult, CriterionError> {
        let states = matrix.state_count();
        if states > 0 && self.probabilities.len() != states {
            return Err(CriterionError::invalid_parameter(
                CriterionKind::Bayes,
                format!(
                    "expected {} probabilities, got {}",
                    states,
                    self.probabilities.len()
                ),
            ));
        }

        expected_value(self.name(), self.kind(), &self.probabilities, matrix)
    }
}

/// Evaluates expected payoffs for every strategy.
///
/// Shared by Bayes and Laplace so the two always compute identically.
pub(super) fn expected_value(
    name: String,
    kind: CriterionKind,
    probabilities: &[f64],
    matrix: &PayoffMatrix,
) -> Result<CriterionResult, CriterionError> {
    if matrix.is_degenerate() {
        return Ok(CriterionResult::undetermined(name, kind));
    }

    let mut values = Vec::with_capacity(matrix.strategy_count());
    let mut calculations = Vec::with_capacity(matrix.strategy_count());

    for i in 0..matrix.strategy_count() {
        let row = matrix.row(i)?;
        let score = row
            .iter()
            .zip(probabilities)
            .fold(0.0, |acc, (payoff, p)| acc + payoff * p);
        values.push(score);
        calculations.push(CalculationStep::new(
            i,
            matrix.strategy_name(i)?,
            score,
            StepDetail::ExpectedValue {
                payoffs: row.to_vec(),
                probabilities: probabilities.to_vec(),
            },
        ));
    }

    Ok(CriterionResult::select(name, kind, values, calculations, matrix)?)
}
