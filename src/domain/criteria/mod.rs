//! Criteria Module - classical decision rules over a payoff matrix.
//!
//! Every rule turns a [`PayoffMatrix`](crate::domain::matrix::PayoffMatrix)
//! into one score per strategy and picks the optimal strategy.
//!
//! # Components
//!
//! - `WaldCriterion` - maximin, best of the worst cases
//! - `MaximaxCriterion` - best of the best cases
//! - `SavageCriterion` - minimax regret
//! - `HurwitzCriterion` - α-weighted blend of best and worst case
//! - `BayesCriterion` - expected value under given probabilities
//! - `LaplaceCriterion` - expected value under equal probabilities
//! - `CriterionFactory` - builds any of the above from an identifier
//!
//! # Tie-break
//!
//! When several strategies attain the optimal score, the first one in row
//! order is selected. `CriterionResult::tied_indices` keeps all of them.

mod bayes;
mod criterion;
mod errors;
mod factory;
mod hurwitz;
mod kind;
mod laplace;
mod maximax;
mod result;
mod savage;
mod wald;

pub use bayes::BayesCriterion;
pub use criterion::Criterion;
pub use errors::CriterionError;
pub use factory::{ConfiguredCriterion, CriterionFactory, CriterionParams};
pub use hurwitz::{HurwitzCriterion, DEFAULT_HURWITZ_ALPHA};
pub use kind::{CriterionKind, EvaluationMode, Objective};
pub use laplace::LaplaceCriterion;
pub use maximax::MaximaxCriterion;
pub use result::{CalculationStep, CriterionResult, StepDetail, UNDETERMINED_STRATEGY};
pub use savage::SavageCriterion;
pub use wald::WaldCriterion;


#[cfg(test)]
mod property_tests {
    use super::*;
    use crate::domain::matrix::PayoffMatrix;
    use proptest::prelude::*;

    fn matrix_strategy() -> impl Strategy<Value = PayoffMatrix> {
        (1usize..6, 1usize..6).prop_flat_map(|(rows, cols)| {
            prop::collection::vec(prop::collection::vec(-1.0e6..1.0e6f64, cols), rows)
                .prop_map(PayoffMatrix::from_rows)
        })
    }

    proptest! {
        #[test]
        fn wald_never_exceeds_maximax(matrix in matrix_strategy()) {
            let wald = WaldCriterion::new().calculate(&matrix).unwrap();
            let maximax = MaximaxCriterion::new().calculate(&matrix).unwrap();
            for (low, high) in wald.values.iter().zip(&maximax.values) {
                prop_assert!(low <= high);
            }
        }

        #[test]
        fn hurwitz_extremes_match_wald_and_maximax(matrix in matrix_strategy()) {
            let pessimist = HurwitzCriterion::new(0.0).unwrap().calculate(&matrix).unwrap();
            let optimist = HurwitzCriterion::new(1.0).unwrap().calculate(&matrix).unwrap();
            let wald = WaldCriterion::new().calculate(&matrix).unwrap();
            let maximax = MaximaxCriterion::new().calculate(&matrix).unwrap();

            prop_assert_eq!(&pessimist.values, &wald.values);
            prop_assert_eq!(&optimist.values, &maximax.values);
            prop_assert_eq!(pessimist.optimal_index, wald.optimal_index);
            prop_assert_eq!(optimist.optimal_index, maximax.optimal_index);
        }

        #[test]
        fn laplace_matches_uniform_bayes(matrix in matrix_strategy()) {
            let n = matrix.state_count();
            let bayes = BayesCriterion::new(vec![1.0 / n as f64; n])
                .unwrap()
                .calculate(&matrix)
                .unwrap();
            let laplace = LaplaceCriterion::new().calculate(&matrix).unwrap();

            for (a, b) in laplace.values.iter().zip(&bayes.values) {
                prop_assert!((a - b).abs() < 1e-9);
            }
        }

        #[test]
        fn savage_regret_is_never_negative(matrix in matrix_strategy()) {
            let regrets = SavageCriterion::regret_matrix(&matrix).unwrap();
            for row in regrets {
                for r in row {
                    prop_assert!(r >= 0.0);
                }
            }
        }

        #[test]
        fn optimal_index_attains_objective(matrix in matrix_strategy(), alpha in 0.0..=1.0f64) {
            let params = CriterionParams::new()
                .with_alpha(alpha)
                .with_probabilities(LaplaceCriterion::uniform_probabilities(matrix.state_count()));

            for kind in CriterionKind::ALL {
                let result = CriterionFactory::create_kind(kind, &params)
                    .unwrap()
                    .calculate(&matrix)
                    .unwrap();
                let index = result.optimal_index.unwrap();
                let chosen = result.values[index];
                for (i, v) in result.values.iter().enumerate() {
                    match kind.objective() {
                        Objective::Maximize => prop_assert!(*v <= chosen),
                        Objective::Minimize => prop_assert!(*v >= chosen),
                    }
                    if i < index {
                        prop_assert!(*v != chosen, "first optimal index must win");
                    }
                }
            }
        }
    }
}
