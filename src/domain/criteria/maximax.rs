//! Maximax criterion - best of the best cases.

use super::{CalculationStep, Criterion, CriterionError, CriterionKind, CriterionResult, StepDetail};
use crate::domain::matrix::PayoffMatrix;

/// Scores each strategy by its largest payoff and picks the largest score.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MaximaxCriterion;

impl MaximaxCriterion {
    pub fn new() -> Self {
        Self
    }
}

impl Criterion for MaximaxCriterion {
    fn kind(&self) -> CriterionKind {
        CriterionKind::Maximax
    }

    fn name(&self) -> String {
        self.kind().display_name().to_string()
    }

    fn calculate(&self, matrix: &PayoffMatrix) -> Result<CriterionResult, CriterionError> {
        if matrix.is_degenerate() {
            return Ok(CriterionResult::undetermined(self.name(), self.kind()));
        }

        let mut values = Vec::with_capacity(matrix.strategy_count());
        let mut calculations = Vec::with_capacity(matrix.strategy_count());

        for i in 0..matrix.strategy_count() {
            let score = matrix.row_max(i)?;
            values.push(score);
            calculations.push(CalculationStep::new(
                i,
                matrix.strategy_name(i)?,
                score,
                StepDetail::RowMaximum {
                    payoffs: matrix.row(i)?.to_vec(),
                },
            ));
        }

        Ok(CriterionResult::select(
            self.name(),
            self.kind(),
            values,
            calculations,
            matrix,
        )?)
    }
}
