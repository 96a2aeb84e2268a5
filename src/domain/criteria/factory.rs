//! Criterion Factory - maps an identifier and parameters to an evaluator.

use serde::{Deserialize, Serialize};

use super::{
    BayesCriterion, Criterion, CriterionError, CriterionKind, CriterionResult, HurwitzCriterion,
    LaplaceCriterion, MaximaxCriterion, SavageCriterion, WaldCriterion, DEFAULT_HURWITZ_ALPHA,
};
use crate::domain::matrix::PayoffMatrix;

/// Rule-specific parameters. Each criterion reads only what it needs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CriterionParams {
    /// Hurwitz coefficient of optimism. Defaults to 0.5.
    pub alpha: Option<f64>,
    /// Bayes state probabilities. Required for Bayes.
    pub probabilities: Option<Vec<f64>>,
}

impl CriterionParams {
    /// Creates an empty parameter bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the Hurwitz α.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = Some(alpha);
        self
    }

    /// Sets the Bayes probability vector.
    pub fn with_probabilities(mut self, probabilities: Vec<f64>) -> Self {
        self.probabilities = Some(probabilities);
        self
    }
}

/// A constructed criterion of any kind.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfiguredCriterion {
    Wald(WaldCriterion),
    Maximax(MaximaxCriterion),
    Savage(SavageCriterion),
    Hurwitz(HurwitzCriterion),
    Bayes(BayesCriterion),
    Laplace(LaplaceCriterion),
}

impl ConfiguredCriterion {
    fn as_criterion(&self) -> &dyn Criterion {
        match self {
            ConfiguredCriterion::Wald(c) => c,
            ConfiguredCriterion::Maximax(c) => c,
            ConfiguredCriterion::Savage(c) => c,
            ConfiguredCriterion::Hurwitz(c) => c,
            ConfiguredCriterion::Bayes(c) => c,
            ConfiguredCriterion::Laplace(c) => c,
        }
    }
}

impl Criterion for ConfiguredCriterion {
    fn kind(&self) -> CriterionKind {
        self.as_criterion().kind()
    }

    fn name(&self) -> String {
        self.as_criterion().name()
    }

    fn calculate(&self, matrix: &PayoffMatrix) -> Result<CriterionResult, CriterionError> {
        self.as_criterion().calculate(matrix)
    }
}

/// Builds criteria from identifiers.
pub struct CriterionFactory;

impl CriterionFactory {
    /// Creates a criterion from a case-insensitive identifier.
    ///
    /// # Errors
    ///
    /// - `UnknownCriterion` for an identifier outside the six rules
    /// - `MissingParameter` for Bayes without probabilities
    /// - `InvalidParameter` for a malformed α or probability vector
    pub fn create(
        identifier: &str,
        params: &CriterionParams,
    ) -> Result<ConfiguredCriterion, CriterionError> {
        let kind: CriterionKind = identifier.parse()?;
        Self::create_kind(kind, params)
    }

    /// Creates a criterion of a known kind.
    pub fn create_kind(
        kind: CriterionKind,
        params: &CriterionParams,
    ) -> Result<ConfiguredCriterion, CriterionError> {
        let criterion = match kind {
            CriterionKind::Wald => ConfiguredCriterion::Wald(WaldCriterion::new()),
            CriterionKind::Maximax => ConfiguredCriterion::Maximax(MaximaxCriterion::new()),
            CriterionKind::Savage => ConfiguredCriterion::Savage(SavageCriterion::new()),
            CriterionKind::Hurwitz => ConfiguredCriterion::Hurwitz(HurwitzCriterion::new(
                params.alpha.unwrap_or(DEFAULT_HURWITZ_ALPHA),
            )?),
            CriterionKind::Bayes => {
                let probabilities = params
                    .probabilities
                    .clone()
                    .ok_or(CriterionError::missing_parameter(kind, "probabilities"))?;
                ConfiguredCriterion::Bayes(BayesCriterion::new(probabilities)?)
            }
            CriterionKind::Laplace => ConfiguredCriterion::Laplace(LaplaceCriterion::new()),
        };
        Ok(criterion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::criteria::fixtures::scenario_matrix;

    #[test]
    fn create_builds_every_kind() {
        let params = CriterionParams::new().with_probabilities(vec![0.25; 4]);
        for kind in CriterionKind::ALL {
            let criterion = CriterionFactory::create(kind.as_str(), &params).unwrap();
            assert_eq!(criterion.kind(), kind);
        }
    }

    #[test]
    fn create_is_case_insensitive() {
        let criterion = CriterionFactory::create("SaVaGe", &CriterionParams::new()).unwrap();
        assert_eq!(criterion, ConfiguredCriterion::Savage(SavageCriterion::new()));
    }

    #[test]
    fn create_rejects_unknown_identifier() {
        let err = CriterionFactory::create("regret", &CriterionParams::new()).unwrap_err();
        assert_eq!(err, CriterionError::UnknownCriterion("regret".to_string()));
    }

    #[test]
    fn hurwitz_alpha_defaults_to_half() {
        let criterion = CriterionFactory::create("hurwitz", &CriterionParams::new()).unwrap();
        match criterion {
            ConfiguredCriterion::Hurwitz(h) => assert_eq!(h.alpha(), 0.5),
            other => panic!("Expected Hurwitz, got {:?}", other),
        }
    }

    #[test]
    fn hurwitz_uses_supplied_alpha() {
        let params = CriterionParams::new().with_alpha(0.8);
        let criterion = CriterionFactory::create("hurwitz", &params).unwrap();
        assert_eq!(criterion.name(), "Hurwitz (α = 0.8)");
    }

    #[test]
    fn hurwitz_rejects_bad_alpha() {
        let params = CriterionParams::new().with_alpha(2.0);
        assert!(matches!(
            CriterionFactory::create("hurwitz", &params),
            Err(CriterionError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn bayes_requires_probabilities() {
        let err = CriterionFactory::create("bayes", &CriterionParams::new()).unwrap_err();
        assert_eq!(
            err,
            CriterionError::MissingParameter {
                criterion: CriterionKind::Bayes,
                parameter: "probabilities",
            }
        );
    }

    #[test]
    fn bayes_probabilities_are_not_normalized_by_factory() {
        let params = CriterionParams::new().with_probabilities(vec![1.0, 1.0, 1.0, 1.0]);
        let criterion = CriterionFactory::create("bayes", &params).unwrap();
        let result = criterion.calculate(&scenario_matrix()).unwrap();
        assert_eq!(result.values[0], 2240.0);
    }

    #[test]
    fn configured_criterion_delegates_calculation() {
        let criterion = CriterionFactory::create_kind(CriterionKind::Wald, &CriterionParams::new())
            .unwrap();
        let result = criterion.calculate(&scenario_matrix()).unwrap();
        assert_eq!(result.optimal_index, Some(0));
        assert_eq!(result.name, "Wald (maximin)");
    }

    #[test]
    fn params_deserialize_with_missing_fields() {
        let params: CriterionParams = serde_json::from_str(r#"{"alpha": 0.2}"#).unwrap();
        assert_eq!(params.alpha, Some(0.2));
        assert_eq!(params.probabilities, None);
    }
}
