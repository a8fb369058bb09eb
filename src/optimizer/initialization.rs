use crate::frequency::{has_distinct_letters, FrequencyProfile, WordStats};
use crate::key::{index_letter, letter_index, Key, ALPHABET_LEN};
use crate::language::LanguageModel;
use tracing::debug;

/// A word-pattern hint applied while seeding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedHint {
    pub cipher_word: String,
    pub plain_word: &'static str,
}

/// Rank-for-rank match of ciphertext letter frequencies against the model.
///
/// Letters absent from the ciphertext take the leftover reference letters in
/// alphabetical order, so the result is always a full permutation.
pub fn rank_matched_key(profile: &FrequencyProfile, model: &LanguageModel) -> Key {
    let reference = model.frequency_order();
    let present = profile.presence();

    let mut ranked = profile.ranked();
    ranked.extend((0..ALPHABET_LEN).filter(|&c| !present[c]));

    let mut key = Key::identity();
    for (&c, &p) in ranked.iter().zip(reference.iter()) {
        key.assign(index_letter(c), index_letter(p));
    }
    key
}

/// Overlays the short-word hypotheses "A", "TO" and "THE" onto `key`.
pub fn apply_pattern_hints(key: &mut Key, stats: &WordStats) -> Vec<SeedHint> {
    let mut applied = Vec::new();
    // Cipher -> plain pairs fixed during this pass.
    let mut fixed: Vec<(usize, usize)> = Vec::new();

    if let Some(word) = stats.most_frequent(1, |_| true) {
        spell(key, word, "A", &mut fixed);
        applied.push(SeedHint {
            cipher_word: word.to_string(),
            plain_word: "A",
        });
    }

    if let Some(word) = stats.most_frequent(2, |_| true) {
        if has_distinct_letters(word) {
            spell(key, word, "TO", &mut fixed);
            applied.push(SeedHint {
                cipher_word: word.to_string(),
                plain_word: "TO",
            });
        }
    }

    if let Some(word) = stats.most_frequent(3, has_distinct_letters) {
        if collides(word, "THE", &fixed) {
            debug!("Seed hint THE skipped: '{}' conflicts with earlier hints", word);
        } else {
            spell(key, word, "THE", &mut fixed);
            applied.push(SeedHint {
                cipher_word: word.to_string(),
                plain_word: "THE",
            });
        }
    }

    applied
}

/// Frequency ranking followed by pattern hints.
pub fn build_candidate_key(
    profile: &FrequencyProfile,
    stats: &WordStats,
    model: &LanguageModel,
) -> Key {
    let mut key = rank_matched_key(profile, model);
    let hints = apply_pattern_hints(&mut key, stats);
    for h in &hints {
        debug!("Seed hint: {} -> {}", h.cipher_word, h.plain_word);
    }
    debug_assert!(key.is_bijective());
    key
}

fn spell(key: &mut Key, cipher: &str, plain: &str, fixed: &mut Vec<(usize, usize)>) {
    for (c, p) in cipher.bytes().zip(plain.bytes()) {
        key.assign(c, p);
        if let (Some(ci), Some(pi)) = (letter_index(c), letter_index(p)) {
            fixed.retain(|&(fc, fp)| fc != ci && fp != pi);
            fixed.push((ci, pi));
        }
    }
}

fn collides(cipher: &str, plain: &str, fixed: &[(usize, usize)]) -> bool {
    cipher.bytes().zip(plain.bytes()).any(|(c, p)| {
        match (letter_index(c), letter_index(p)) {
            (Some(ci), Some(pi)) => fixed
                .iter()
                .any(|&(fc, fp)| (fc == ci) != (fp == pi)),
            _ => true,
        }
    })
}
