//! Criterion identifiers and evaluation modes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::CriterionError;
use crate::domain::foundation::ValidationError;

/// Whether a criterion looks for the highest or the lowest score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Objective {
    Maximize,
    Minimize,
}

/// Closed set of decision rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CriterionKind {
    Wald,
    Maximax,
    Savage,
    Hurwitz,
    Bayes,
    Laplace,
}

impl CriterionKind {
    /// All criteria in evaluation order.
    pub const ALL: [CriterionKind; 6] = [
        CriterionKind::Wald,
        CriterionKind::Maximax,
        CriterionKind::Savage,
        CriterionKind::Hurwitz,
        CriterionKind::Bayes,
        CriterionKind::Laplace,
    ];

    /// Returns the lowercase identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            CriterionKind::Wald => "wald",
            CriterionKind::Maximax => "maximax",
            CriterionKind::Savage => "savage",
            CriterionKind::Hurwitz => "hurwitz",
            CriterionKind::Bayes => "bayes",
            CriterionKind::Laplace => "laplace",
        }
    }

    /// Returns the human-readable name used in reports.
    ///
    /// Hurwitz results append their α to this.
    pub fn display_name(&self) -> &'static str {
        match self {
            CriterionKind::Wald => "Wald (maximin)",
            CriterionKind::Maximax => "Maximax",
            CriterionKind::Savage => "Savage (minimax regret)",
            CriterionKind::Hurwitz => "Hurwitz",
            CriterionKind::Bayes => "Bayes (expected value)",
            CriterionKind::Laplace => "Laplace (equal likelihood)",
        }
    }

    /// Returns the optimization direction. Only Savage minimizes (regret).
    pub fn objective(&self) -> Objective {
        match self {
            CriterionKind::Savage => Objective::Minimize,
            _ => Objective::Maximize,
        }
    }
}

impl fmt::Display for CriterionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CriterionKind {
    type Err = CriterionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "wald" => Ok(CriterionKind::Wald),
            "maximax" => Ok(CriterionKind::Maximax),
            "savage" => Ok(CriterionKind::Savage),
            "hurwitz" => Ok(CriterionKind::Hurwitz),
            "bayes" => Ok(CriterionKind::Bayes),
            "laplace" => Ok(CriterionKind::Laplace),
            _ => Err(CriterionError::UnknownCriterion(s.to_string())),
        }
    }
}

/// Decision setting, which selects the family of criteria to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvaluationMode {
    /// State probabilities unknown; parameterized by Hurwitz α.
    Uncertainty,
    /// State probabilities known; parameterized by a probability vector.
    Risk,
}

impl EvaluationMode {
    /// Criteria evaluated in this mode, in order.
    pub fn criteria(&self) -> &'static [CriterionKind] {
        match self {
            EvaluationMode::Uncertainty => &[
                CriterionKind::Wald,
                CriterionKind::Maximax,
                CriterionKind::Savage,
                CriterionKind::Hurwitz,
            ],
            EvaluationMode::Risk => &[CriterionKind::Bayes, CriterionKind::Laplace],
        }
    }

    /// Returns the lowercase identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            EvaluationMode::Uncertainty => "uncertainty",
            EvaluationMode::Risk => "risk",
        }
    }
}

impl fmt::Display for EvaluationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EvaluationMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "uncertainty" => Ok(EvaluationMode::Uncertainty),
            "risk" => Ok(EvaluationMode::Risk),
            _ => Err(ValidationError::invalid_format(
                "analysis_type",
                format!("expected 'uncertainty' or 'risk', got '{}'", s),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::criteria::{Criterion, CriterionFactory, CriterionParams};

    #[test]
    fn kind_parses_case_insensitively() {
        assert_eq!("WALD".parse::<CriterionKind>().unwrap(), CriterionKind::Wald);
        assert_eq!("Hurwitz".parse::<CriterionKind>().unwrap(), CriterionKind::Hurwitz);
        assert_eq!(" laplace ".parse::<CriterionKind>().unwrap(), CriterionKind::Laplace);
    }

    #[test]
    fn kind_rejects_unknown_identifier() {
        assert_eq!(
            "minimax".parse::<CriterionKind>(),
            Err(CriterionError::UnknownCriterion("minimax".to_string()))
        );
    }

    #[test]
    fn every_kind_roundtrips_through_its_identifier() {
        for kind in CriterionKind::ALL {
            assert_eq!(kind.as_str().parse::<CriterionKind>().unwrap(), kind);
        }
    }

    #[test]
    fn display_name_matches_criterion_name() {
        let params = CriterionParams::new().with_probabilities(vec![1.0]);
        for kind in CriterionKind::ALL {
            let criterion = CriterionFactory::create_kind(kind, &params).unwrap();
            assert!(criterion.name().starts_with(kind.display_name()));
        }
        assert_eq!(CriterionKind::Bayes.display_name(), "Bayes (expected value)");
    }

    #[test]
    fn only_savage_minimizes() {
        for kind in CriterionKind::ALL {
            let expected = if kind == CriterionKind::Savage {
                Objective::Minimize
            } else {
                Objective::Maximize
            };
            assert_eq!(kind.objective(), expected);
        }
    }

    #[test]
    fn uncertainty_mode_runs_four_criteria() {
        assert_eq!(
            EvaluationMode::Uncertainty.criteria(),
            &[
                CriterionKind::Wald,
                CriterionKind::Maximax,
                CriterionKind::Savage,
                CriterionKind::Hurwitz
            ]
        );
    }

    #[test]
    fn risk_mode_runs_bayes_and_laplace() {
        assert_eq!(
            EvaluationMode::Risk.criteria(),
            &[CriterionKind::Bayes, CriterionKind::Laplace]
        );
    }

    #[test]
    fn mode_parses_case_insensitively() {
        assert_eq!("RISK".parse::<EvaluationMode>().unwrap(), EvaluationMode::Risk);
        assert!("certainty".parse::<EvaluationMode>().is_err());
    }

    #[test]
    fn kind_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&CriterionKind::Savage).unwrap(), "\"savage\"");
        assert_eq!(serde_json::to_string(&EvaluationMode::Risk).unwrap(), "\"risk\"");
    }
}
