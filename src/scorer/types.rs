use crate::config::ConfidenceThresholds;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreDetails {
    // Top-line Score (floored at zero)
    pub total: f32,
    // Sum of terms before flooring
    pub raw_total: f32,

    // Word Terms
    pub dictionary: f32,
    pub phrase_bonus: f32,
    pub word_length: f32,

    // N-Gram Terms
    pub digram: f32,
    pub trigram: f32,

    // Distribution
    pub frequency: f32,

    // Implausible words (stored positive, subtracted from the total)
    pub penalty: f32,

    // === STATISTICAL COUNTERS ===
    pub word_count: usize,
    pub dictionary_hits: usize,
    pub digram_hits: usize,
    pub trigram_hits: usize,
    pub penalized_words: usize,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Confidence {
    VeryHigh,
    High,
    Medium,
    Low,
}

impl Confidence {
    pub fn classify(score: f32, thresholds: &ConfidenceThresholds) -> Self {
        if score > thresholds.very_high {
            Self::VeryHigh
        } else if score > thresholds.high {
            Self::High
        } else if score > thresholds.medium {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::VeryHigh => "Very high confidence",
            Self::High => "High confidence",
            Self::Medium => "Medium confidence",
            Self::Low => "Low confidence",
        }
    }
}
