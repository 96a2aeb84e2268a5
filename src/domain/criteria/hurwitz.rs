//! Hurwitz criterion - weighted blend of optimism and pessimism.

use super::{CalculationStep, Criterion, CriterionError, CriterionKind, CriterionResult, StepDetail};
use crate::domain::matrix::PayoffMatrix;

/// Coefficient of optimism used when none is supplied.
pub const DEFAULT_HURWITZ_ALPHA: f64 = 0.5;

/// Scores each strategy as `α * row_max + (1 - α) * row_min`.
///
/// α = 1 reduces to Maximax and α = 0 to Wald.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HurwitzCriterion {
    alpha: f64,
}

impl HurwitzCriterion {
    /// Creates the criterion, rejecting α outside [0, 1].
    pub fn new(alpha: f64) -> Result<Self, CriterionError> {
        if !alpha.is_finite() || !(0.0..=1.0).contains(&alpha) {
            return Err(CriterionError::invalid_parameter(
                CriterionKind::Hurwitz,
                format!("alpha must be within [0, 1], got {}", alpha),
            ));
        }
        Ok(Self { alpha })
    }

    /// Returns the coefficient of optimism.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

impl Default for HurwitzCriterion {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_HURWITZ_ALPHA,
        }
    }
}

impl Criterion for HurwitzCriterion {
    fn kind(&self) -> CriterionKind {
        CriterionKind::Hurwitz
    }

    fn name(&self) -> String {
        format!("{} (α = {})", self.kind().display_name(), self.alpha)
    }

    fn calculate(&self, matrix: &PayoffMatrix) -> Result<CriterionResult, CriterionError> {
        if matrix.is_degenerate() {
            return Ok(CriterionResult::undetermined(self.name(), self.kind()));
        }

        let mut values = Vec::with_capacity(matrix.strategy_count());
        let mut calculations = Vec::with_capacity(matrix.strategy_count());

        for i in 0..matrix.strategy_count() {
            let row_max = matrix.row_max(i)?;
            let row_min = matrix.row_min(i)?;
            let score = self.alpha * row_max + (1.0 - self.alpha) * row_min;
            values.push(score);
            calculations.push(CalculationStep::new(
                i,
                matrix.strategy_name(i)?,
                score,
                StepDetail::Hurwitz {
                    alpha: self.alpha,
                    row_max,
                    row_min,
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
