//! Criterion evaluation errors.

use thiserror::Error;

use super::CriterionKind;
use crate::domain::matrix::MatrixError;

/// Faults raised while constructing or evaluating a single criterion.
///
/// These are local to one criterion. The orchestration layer records them as
/// an undetermined recommendation and keeps evaluating the rest of the batch.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CriterionError {
    #[error("Invalid parameter for {criterion}: {reason}")]
    InvalidParameter {
        criterion: CriterionKind,
        reason: String,
    },

    #[error("Missing parameter '{parameter}' for {criterion}")]
    MissingParameter {
        criterion: CriterionKind,
        parameter: &'static str,
    },

    #[error("Unknown criterion: '{0}'")]
    UnknownCriterion(String),

    #[error(transparent)]
    Matrix(#[from] MatrixError),
}

impl CriterionError {
    /// Creates an invalid parameter error.
    pub fn invalid_parameter(criterion: CriterionKind, reason: impl Into<String>) -> Self {
        CriterionError::InvalidParameter {
            criterion,
            reason: reason.into(),
        }
    }

    /// Creates a missing parameter error.
    pub fn missing_parameter(criterion: CriterionKind, parameter: &'static str) -> Self {
        CriterionError::MissingParameter {
            criterion,
            parameter,
        }
    }
}
