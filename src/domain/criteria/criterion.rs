//! The Criterion capability shared by every decision rule.

use super::{CriterionError, CriterionKind, CriterionResult};
use crate::domain::matrix::PayoffMatrix;

/// A decision rule that scores every strategy of a payoff matrix.
///
/// # Contract
///
/// Implementations must:
/// - Be free of side effects; the same matrix always yields the same result
/// - Return [`CriterionResult::undetermined`] for a degenerate matrix
/// - Pick the first strategy in row order when several attain the optimum
/// - Fail with [`CriterionError::InvalidParameter`] only for malformed parameters
pub trait Criterion {
    /// The rule implemented.
    fn kind(&self) -> CriterionKind;

    /// Human-readable name, including parameters such as α.
    fn name(&self) -> String;

    /// Scores every strategy and selects the optimum.
    fn calculate(&self, matrix: &PayoffMatrix) -> Result<CriterionResult, CriterionError>;
}
