pub mod engine;
pub mod types;

pub use self::types::{Confidence, ScoreDetails};
use crate::config::{Config, ScoringWeights};
use crate::language::LanguageModel;
use std::sync::Arc;

/// Fitness function over decrypted text. Pure: the same text always yields
/// the same score.
#[derive(Debug, Clone)]
pub struct Scorer {
    pub model: Arc<LanguageModel>,
    pub weights: ScoringWeights,
    /// Uppercased known plaintext that earns `bonus_phrase` when present.
    pub phrase: Option<String>,
}

impl Scorer {
    pub fn new(model: Arc<LanguageModel>, weights: ScoringWeights) -> Self {
        Self {
            model,
            weights,
            phrase: None,
        }
    }

    pub fn from_config(model: Arc<LanguageModel>, config: &Config) -> Self {
        Self::new(model, config.weights.clone()).with_phrase(config.search.get_calibration_phrase())
    }

    pub fn with_phrase(mut self, phrase: Option<String>) -> Self {
        self.phrase = phrase.map(|p| p.to_ascii_uppercase());
        self
    }

    /// Total only; called once per candidate by the optimizer.
    #[inline]
    pub fn score(&self, text: &str) -> f32 {
        engine::score_details(self, text).total
    }

    /// Per-term breakdown for reports.
    pub fn score_details(&self, text: &str) -> ScoreDetails {
        engine::score_details(self, text)
    }
}
