//! Aggregation Module - combines criterion verdicts into a single conclusion.
//!
//! # Components
//!
//! - `ResultsAggregator` - per-session store of recommendations
//! - `FrequencyTable` - citations per strategy, first-appearance ordered
//! - `FinalRecommendation` - winner, share, confidence band, ties
//! - `AnalysisStatistics` - serializable snapshot used for export
//!
//! Everything here is derived on demand from the recorded recommendations;
//! nothing is cached between calls.

mod aggregator;
mod final_recommendation;
mod frequency;
mod recommendation;

pub use aggregator::{AggregatorState, AnalysisStatistics, ResultsAggregator};
pub use final_recommendation::{
    Confidence, FinalRecommendation, HIGH_CONFIDENCE_THRESHOLD, LOW_CONFIDENCE_THRESHOLD,
};
pub use frequency::FrequencyTable;
pub use recommendation::{Recommendation, RecommendationDetails};
