//! Final Recommendation - the consensus across all criteria.

use serde::{Deserialize, Serialize};

use super::FrequencyTable;
use crate::domain::foundation::Percentage;

/// Share at or above which the consensus is considered strong.
pub const HIGH_CONFIDENCE_THRESHOLD: u8 = 70;

/// Share at or below which the consensus is considered weak.
pub const LOW_CONFIDENCE_THRESHOLD: u8 = 30;

/// Qualitative strength of the winning strategy's share.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    /// Maps a winning share to a confidence band.
    ///
    /// `High` is checked first, then `Low`; everything between is `Medium`.
    pub fn from_percentage(percentage: Percentage) -> Self {
        if percentage.value() >= HIGH_CONFIDENCE_THRESHOLD {
            Confidence::High
        } else if percentage.value() <= LOW_CONFIDENCE_THRESHOLD {
            Confidence::Low
        } else {
            Confidence::Medium
        }
    }

    /// Returns the display label for this confidence.
    pub fn label(&self) -> &'static str {
        match self {
            Confidence::High => "high",
            Confidence::Medium => "medium",
            Confidence::Low => "low",
        }
    }
}

/// Winning strategy across all recorded recommendations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalRecommendation {
    /// Most frequently recommended strategy; absent when nothing was cited.
    pub strategy: Option<String>,
    /// Citations of the winning strategy.
    pub frequency: usize,
    /// All recommendations recorded, undetermined ones included.
    pub total: usize,
    pub percentage: Percentage,
    pub confidence: Confidence,
    pub has_tie: bool,
    /// Every strategy sharing the winning count, in first-appearance order.
    pub alternatives: Vec<String>,
}

impl FinalRecommendation {
    /// Result when no strategy was cited.
    pub fn none(total: usize) -> Self {
        Self {
            strategy: None,
            frequency: 0,
            total,
            percentage: Percentage::ZERO,
            confidence: Confidence::Low,
            has_tie: false,
            alternatives: Vec::new(),
        }
    }

    /// Derives the consensus from citation counts over `total` recommendations.
    pub fn from_frequencies(frequencies: &FrequencyTable, total: usize) -> Self {
        let ranked = frequencies.ranked();
        let Some(&(winner, frequency)) = ranked.first() else {
            return Self::none(total);
        };

        let percentage = Percentage::of_ratio(frequency, total);
        let has_tie = ranked
            .get(1)
            .is_some_and(|&(_, runner_up)| runner_up == frequency);

        Self {
            strategy: Some(winner.to_string()),
            frequency,
            total,
            percentage,
            confidence: Confidence::from_percentage(percentage),
            has_tie,
            alternatives: frequencies.leaders().into_iter().map(String::from).collect(),
        }
    }
}
