use crate::key::Key;
use crate::scorer::Scorer;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One point of the search: a key, what it decrypts to, and how good that is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hypothesis {
    pub key: Key,
    pub plaintext: String,
    pub score: f32,
}

impl Hypothesis {
    pub fn evaluate(scorer: &Scorer, ciphertext: &str, key: Key) -> Self {
        let plaintext = key.apply(ciphertext);
        let score = scorer.score(&plaintext);
        Self {
            key,
            plaintext,
            score,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClimbStats {
    pub evaluations: usize,
    pub improvements: usize,
    pub sweeps: usize,
}

/// Sequential sweeps over `pairs`, adopting any swap that beats the current
/// best. Stops on a sweep without improvement or when `budget` evaluations
/// are spent.
pub fn climb_first_improvement(
    scorer: &Scorer,
    ciphertext: &str,
    start: Hypothesis,
    pairs: &[(usize, usize)],
    budget: usize,
) -> (Hypothesis, ClimbStats) {
    let mut best = start;
    let mut stats = ClimbStats::default();

    'sweeps: while stats.evaluations < budget && !pairs.is_empty() {
        stats.sweeps += 1;
        let mut improved = false;

        for &(a, b) in pairs {
            if stats.evaluations >= budget {
                break 'sweeps;
            }
            let mut key = best.key;
            key.swap_images(a, b);
            let candidate = Hypothesis::evaluate(scorer, ciphertext, key);
            stats.evaluations += 1;

            if candidate.score > best.score {
                best = candidate;
                stats.improvements += 1;
                improved = true;
            }
        }

        debug!(
            "Sweep {}: best {:.1} after {} evaluations",
            stats.sweeps, best.score, stats.evaluations
        );

        if !improved {
            break;
        }
    }

    (best, stats)
}

/// Parallel rounds: every remaining pair is scored against the same
/// snapshot, the best-scoring swap wins (earlier pair on ties) and is adopted
/// only if it improves. The snapshot is replaced after the round joins.
pub fn climb_steepest_ascent(
    scorer: &Scorer,
    ciphertext: &str,
    start: Hypothesis,
    pairs: &[(usize, usize)],
    budget: usize,
) -> (Hypothesis, ClimbStats) {
    let mut best = start;
    let mut stats = ClimbStats::default();

    while stats.evaluations < budget && !pairs.is_empty() {
        stats.sweeps += 1;
        let take = (budget - stats.evaluations).min(pairs.len());
        let snapshot = best.key;

        let winner = pairs[..take]
            .par_iter()
            .enumerate()
            .map(|(order, &(a, b))| {
                let mut key = snapshot;
                key.swap_images(a, b);
                let plaintext = key.apply(ciphertext);
                (scorer.score(&plaintext), order)
            })
            .reduce_with(|x, y| {
                if y.0 > x.0 || (y.0 == x.0 && y.1 < x.1) {
                    y
                } else {
                    x
                }
            });
        stats.evaluations += take;

        match winner {
            Some((score, order)) if score > best.score => {
                let (a, b) = pairs[order];
                let mut key = snapshot;
                key.swap_images(a, b);
                best = Hypothesis::evaluate(scorer, ciphertext, key);
                stats.improvements += 1;
                debug!(
                    "Round {}: adopted swap ({}, {}) -> {:.1}",
                    stats.sweeps, a, b, best.score
                );
            }
            _ => break,
        }
    }

    (best, stats)
}
