pub mod initialization;
pub mod mutation;
pub mod runner;

pub use self::runner::Hypothesis;
use crate::config::{Config, SwapStrategy};
use crate::frequency::{has_distinct_letters, words, FrequencyProfile, WordStats};
use crate::key::{Key, ALPHABET_LEN};
use crate::scorer::Scorer;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use strum_macros::{Display, EnumIter};
use tracing::{debug, info};

pub struct OptimizationOptions {
    pub pair_swap_budget: usize,
    pub swap_strategy: SwapStrategy,
    pub shuffle_seed: Option<u64>,
    pub trigram_candidates: Vec<String>,
    pub digram_candidates: Vec<String>,
    pub calibration_phrase: Option<String>,
}

impl Default for OptimizationOptions {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for OptimizationOptions {
    fn from(cfg: &Config) -> Self {
        Self {
            pair_swap_budget: cfg.search.pair_swap_budget,
            swap_strategy: cfg.search.swap_strategy,
            shuffle_seed: cfg.search.shuffle_seed,
            trigram_candidates: cfg.search.get_trigram_candidates(),
            digram_candidates: cfg.search.get_digram_candidates(),
            calibration_phrase: cfg.search.get_calibration_phrase(),
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "snake_case")]
pub enum SearchStage {
    Seeded,
    PatternSwap,
    PairSwap,
    PhraseOverlay,
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StageReport {
    pub stage: SearchStage,
    /// Best score once the stage finished.
    pub score: f32,
    pub evaluations: usize,
    /// Whether the stage replaced the best hypothesis.
    pub improved: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrackResult {
    pub best: Hypothesis,
    pub stages: Vec<StageReport>,
    pub evaluations: usize,
    /// Ciphertext letters that occur in the message.
    pub present: [bool; ALPHABET_LEN],
}

impl CrackResult {
    pub fn key(&self) -> &Key {
        &self.best.key
    }

    pub fn score(&self) -> f32 {
        self.best.score
    }

    pub fn plaintext(&self) -> &str {
        &self.best.plaintext
    }

    pub fn stage(&self, stage: SearchStage) -> Option<&StageReport> {
        self.stages.iter().find(|r| r.stage == stage)
    }
}

/// Seeded -> PatternSwap -> PairSwap -> PhraseOverlay -> Done, each stage
/// starting from the best hypothesis of the previous one.
pub struct Optimizer {
    scorer: Arc<Scorer>,
    options: OptimizationOptions,
}

struct Trace {
    best: Hypothesis,
    stages: Vec<StageReport>,
    evaluations: usize,
}

impl Trace {
    fn offer(&mut self, candidate: Hypothesis) -> bool {
        if candidate.score > self.best.score {
            self.best = candidate;
            true
        } else {
            false
        }
    }

    fn close(&mut self, stage: SearchStage, evaluations: usize, improved: bool) {
        debug_assert!(self.best.key.is_bijective());
        self.evaluations += evaluations;
        self.stages.push(StageReport {
            stage,
            score: self.best.score,
            evaluations,
            improved,
        });
        info!(
            "{:<14} best {:>8.1} ({} evaluations)",
            stage.to_string(),
            self.best.score,
            evaluations
        );
    }
}

impl Optimizer {
    pub fn new(scorer: Arc<Scorer>, options: OptimizationOptions) -> Self {
        Self { scorer, options }
    }

    pub fn run(&self, ciphertext: &str) -> CrackResult {
        let scorer = self.scorer.as_ref();
        let profile = FrequencyProfile::from_text(ciphertext);
        let stats = WordStats::from_text(ciphertext);

        // 1. Seeded
        let seed = initialization::build_candidate_key(&profile, &stats, &scorer.model);
        let mut trace = Trace {
            best: Hypothesis::evaluate(scorer, ciphertext, seed),
            stages: Vec::with_capacity(5),
            evaluations: 0,
        };
        trace.close(SearchStage::Seeded, 1, false);

        // 2. PatternSwap
        let (evals, improved) = self.pattern_swap(ciphertext, &stats, &mut trace);
        trace.close(SearchStage::PatternSwap, evals, improved);

        // 3. PairSwap
        let pairs = mutation::swap_pairs(&profile.presence(), self.options.shuffle_seed);
        let start = trace.best.clone();
        let (climbed, climb) = match self.options.swap_strategy {
            SwapStrategy::FirstImprovement => runner::climb_first_improvement(
                scorer,
                ciphertext,
                start,
                &pairs,
                self.options.pair_swap_budget,
            ),
            SwapStrategy::SteepestAscent => runner::climb_steepest_ascent(
                scorer,
                ciphertext,
                start,
                &pairs,
                self.options.pair_swap_budget,
            ),
        };
        let improved = trace.offer(climbed);
        trace.close(SearchStage::PairSwap, climb.evaluations, improved);

        // 4. PhraseOverlay
        let (evals, improved) = self.phrase_overlay(ciphertext, &mut trace);
        trace.close(SearchStage::PhraseOverlay, evals, improved);

        trace.close(SearchStage::Done, 0, false);

        CrackResult {
            best: trace.best,
            stages: trace.stages,
            evaluations: trace.evaluations,
            present: profile.presence(),
        }
    }

    fn pattern_swap(&self, ciphertext: &str, stats: &WordStats, trace: &mut Trace) -> (usize, bool) {
        let scorer = self.scorer.as_ref();
        let mut evals = 0;
        let mut improved = false;

        let slots = [
            (
                stats.most_frequent(3, has_distinct_letters),
                &self.options.trigram_candidates,
            ),
            (stats.most_frequent(2, |_| true), &self.options.digram_candidates),
        ];

        for (cipher_word, candidates) in slots {
            let Some(cipher_word) = cipher_word else {
                continue;
            };
            for plain_word in candidates {
                let Some(key) = mutation::overlay_word(&trace.best.key, cipher_word, plain_word)
                else {
                    continue;
                };
                evals += 1;
                if trace.offer(Hypothesis::evaluate(scorer, ciphertext, key)) {
                    debug!("Pattern swap adopted {} -> {}", cipher_word, plain_word);
                    improved = true;
                }
            }
        }

        (evals, improved)
    }

    fn phrase_overlay(&self, ciphertext: &str, trace: &mut Trace) -> (usize, bool) {
        let Some(phrase) = &self.options.calibration_phrase else {
            return (0, false);
        };
        let phrase_words = words(phrase);
        let cipher_words = words(ciphertext);
        if cipher_words.len() != phrase_words.len() {
            return (0, false);
        }
        let Some(pairs) = mutation::phrase_pairs(&cipher_words, &phrase_words) else {
            debug!("Phrase overlay skipped: word pattern does not fit '{}'", phrase);
            return (0, false);
        };

        let key = mutation::overlay(&trace.best.key, &pairs);
        let improved = trace.offer(Hypothesis::evaluate(self.scorer.as_ref(), ciphertext, key));
        if improved {
            debug!("Phrase overlay adopted");
        }
        (1, improved)
    }
}
