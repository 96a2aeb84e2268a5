//! Savage (minimax regret) criterion.

use super::{CalculationStep, Criterion, CriterionError, CriterionKind, CriterionResult, StepDetail};
use crate::domain::matrix::{MatrixError, PayoffMatrix};

/// Scores each strategy by its worst regret and picks the smallest score.
///
/// Regret for strategy `i` under state `j` is `column_max[j] - data[i][j]`:
/// how much better the best strategy for that state would have done.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SavageCriterion;

impl SavageCriterion {
    pub fn new() -> Self {
        Self
    }

    /// Returns the maximum payoff of every state.
    pub fn column_maxima(matrix: &PayoffMatrix) -> Result<Vec<f64>, MatrixError> {
        (0..matrix.state_count())
            .map(|j| matrix.column_max(j))
            .collect()
    }

    /// Computes the full regret matrix, one row per strategy.
    pub fn regret_matrix(matrix: &PayoffMatrix) -> Result<Vec<Vec<f64>>, MatrixError> {
        let column_maxima = Self::column_maxima(matrix)?;
        (0..matrix.strategy_count())
            .map(|i| matrix.row(i).map(|row| Self::regrets(&column_maxima, row)))
            .collect()
    }

    fn regrets(column_maxima: &[f64], row: &[f64]) -> Vec<f64> {
        column_maxima
            .iter()
            .zip(row)
            .map(|(max, payoff)| max - payoff)
            .collect()
    }
}

impl Criterion for SavageCriterion {
    fn kind(&self) -> CriterionKind {
        CriterionKind::Savage
    }

    fn name(&self) -> String {
        self.kind().display_name().to_string()
    }

    fn calculate(&self, matrix: &PayoffMatrix) -> Result<CriterionResult, CriterionError> {
        if matrix.is_degenerate() {
            return Ok(CriterionResult::undetermined(self.name(), self.kind()));
        }

        // First pass: best payoff per state.
        let column_maxima = Self::column_maxima(matrix)?;

        // Second pass: worst regret per strategy.
        let mut values = Vec::with_capacity(matrix.strategy_count());
        let mut calculations = Vec::with_capacity(matrix.strategy_count());

        for i in 0..matrix.strategy_count() {
            let regrets = Self::regrets(&column_maxima, matrix.row(i)?);
            let score = regrets.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            values.push(score);
            calculations.push(CalculationStep::new(
                i,
                matrix.strategy_name(i)?,
                score,
                StepDetail::Regret {
                    column_maxima: column_maxima.clone(),
                    regrets,
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
