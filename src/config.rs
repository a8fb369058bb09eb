use crate::error::{CfResult, CipherForgeError};
use clap::{parser::ValueSource, ArgMatches, Args, ValueEnum};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use strum_macros::{Display, EnumString};

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub search: SearchParams,
    #[command(flatten)]
    pub weights: ScoringWeights,
    #[command(flatten)]
    pub thresholds: ConfidenceThresholds,
}

/// How the pair-swap stage walks the neighbourhood of the current best key.
#[derive(
    ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum SwapStrategy {
    /// Sequential sweep, adopting the first improving swap.
    FirstImprovement,
    /// Parallel rounds: score every pair against a snapshot, adopt the best.
    SteepestAscent,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    /// Maximum number of pair-swap evaluations.
    #[arg(long, default_value_t = 2_000)]
    pub pair_swap_budget: usize,

    #[arg(long, value_enum, default_value_t = SwapStrategy::FirstImprovement)]
    pub swap_strategy: SwapStrategy,

    /// Shuffle the pair order with this seed instead of walking it lexicographically.
    #[arg(long)]
    pub shuffle_seed: Option<u64>,

    #[arg(long, default_value = "THE,AND,FOR")]
    pub trigram_candidates: String,

    #[arg(long, default_value = "TO,OF,IN,IT,AT")]
    pub digram_candidates: String,

    /// Known plaintext used for the phrase bonus and the whole-message
    /// overlay. Empty disables both.
    #[arg(long, default_value = "SEND THE MONEY TO ALICE")]
    pub calibration_phrase: String,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            pair_swap_budget: 2_000,
            swap_strategy: SwapStrategy::FirstImprovement,
            shuffle_seed: None,
            trigram_candidates: "THE,AND,FOR".to_string(),
            digram_candidates: "TO,OF,IN,IT,AT".to_string(),
            calibration_phrase: "SEND THE MONEY TO ALICE".to_string(),
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    // === WORDS ===
    #[arg(long, default_value_t = 100.0)]
    pub bonus_dictionary_word: f32,
    #[arg(long, default_value_t = 1000.0)]
    pub bonus_phrase: f32,
    #[arg(long, default_value_t = 10.0)]
    pub bonus_word_length: f32,
    #[arg(long, default_value_t = 3)]
    pub short_word_min: usize,
    #[arg(long, default_value_t = 5)]
    pub short_word_max: usize,

    // === N-GRAMS ===
    #[arg(long, default_value_t = 15.0)]
    pub bonus_digram: f32,
    #[arg(long, default_value_t = 25.0)]
    pub bonus_trigram: f32,

    // === DISTRIBUTION ===
    #[arg(long, default_value_t = 10.0)]
    pub frequency_tolerance: f32,

    // === IMPLAUSIBLE WORDS ===
    #[arg(long, default_value_t = 50.0)]
    pub penalty_no_vowels: f32,
    #[arg(long, default_value_t = 30.0)]
    pub penalty_vowel_heavy: f32,
    #[arg(long, default_value_t = 0.7)]
    pub vowel_heavy_ratio: f32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            bonus_dictionary_word: 100.0,
            bonus_phrase: 1000.0,
            bonus_word_length: 10.0,
            short_word_min: 3,
            short_word_max: 5,
            bonus_digram: 15.0,
            bonus_trigram: 25.0,
            frequency_tolerance: 10.0,
            penalty_no_vowels: 50.0,
            penalty_vowel_heavy: 30.0,
            vowel_heavy_ratio: 0.7,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfidenceThresholds {
    #[arg(long = "confidence-very-high", default_value_t = 500.0)]
    pub very_high: f32,
    #[arg(long = "confidence-high", default_value_t = 200.0)]
    pub high: f32,
    #[arg(long = "confidence-medium", default_value_t = 50.0)]
    pub medium: f32,
}

impl Default for ConfidenceThresholds {
    fn default() -> Self {
        Self {
            very_high: 500.0,
            high: 200.0,
            medium: 50.0,
        }
    }
}

impl SearchParams {
    pub fn get_trigram_candidates(&self) -> Vec<String> {
        parse_word_list(&self.trigram_candidates, 3)
    }

    pub fn get_digram_candidates(&self) -> Vec<String> {
        parse_word_list(&self.digram_candidates, 2)
    }

    /// Uppercased phrase, or `None` when disabled.
    pub fn get_calibration_phrase(&self) -> Option<String> {
        let phrase = self.calibration_phrase.trim();
        if phrase.is_empty() {
            None
        } else {
            Some(phrase.to_ascii_uppercase())
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> CfResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            CipherForgeError::Config(format!(
                "failed to read '{}': {}",
                path.as_ref().display(),
                e
            ))
        })?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> CfResult<()> {
        let w = &self.weights;
        if w.short_word_min > w.short_word_max {
            return Err(CipherForgeError::Config(format!(
                "short_word_min ({}) exceeds short_word_max ({})",
                w.short_word_min, w.short_word_max
            )));
        }
        if !(0.0..=1.0).contains(&w.vowel_heavy_ratio) {
            return Err(CipherForgeError::Config(format!(
                "vowel_heavy_ratio must lie in [0, 1], got {}",
                w.vowel_heavy_ratio
            )));
        }
        let t = &self.thresholds;
        if !(t.very_high >= t.high && t.high >= t.medium) {
            return Err(CipherForgeError::Config(
                "confidence thresholds must satisfy very_high >= high >= medium".to_string(),
            ));
        }
        Ok(())
    }

    /// Copies every value the user typed on the command line over `self`.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($section:ident . $field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$section.$field = cli.$section.$field.clone();
                }
            };
        }

        update_if_present!(search.pair_swap_budget, "pair_swap_budget");
        update_if_present!(search.swap_strategy, "swap_strategy");
        update_if_present!(search.shuffle_seed, "shuffle_seed");
        update_if_present!(search.trigram_candidates, "trigram_candidates");
        update_if_present!(search.digram_candidates, "digram_candidates");
        update_if_present!(search.calibration_phrase, "calibration_phrase");

        update_if_present!(weights.bonus_dictionary_word, "bonus_dictionary_word");
        update_if_present!(weights.bonus_phrase, "bonus_phrase");
        update_if_present!(weights.bonus_word_length, "bonus_word_length");
        update_if_present!(weights.short_word_min, "short_word_min");
        update_if_present!(weights.short_word_max, "short_word_max");
        update_if_present!(weights.bonus_digram, "bonus_digram");
        update_if_present!(weights.bonus_trigram, "bonus_trigram");
        update_if_present!(weights.frequency_tolerance, "frequency_tolerance");
        update_if_present!(weights.penalty_no_vowels, "penalty_no_vowels");
        update_if_present!(weights.penalty_vowel_heavy, "penalty_vowel_heavy");
        update_if_present!(weights.vowel_heavy_ratio, "vowel_heavy_ratio");

        update_if_present!(thresholds.very_high, "very_high");
        update_if_present!(thresholds.high, "high");
        update_if_present!(thresholds.medium, "medium");
    }
}

fn parse_word_list(s: &str, len: usize) -> Vec<String> {
    s.split(',')
        .map(|w| w.trim().to_ascii_uppercase())
        .filter(|w| w.len() == len && w.bytes().all(|b| b.is_ascii_alphabetic()))
        .collect()
}
