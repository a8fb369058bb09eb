use super::{ScoreDetails, Scorer};
use crate::frequency::FrequencyProfile;
use crate::key::ALPHABET_LEN;

const VOWELS: &[u8; 5] = b"AEIOU";

/// Scores one decrypted hypothesis, keeping every term separate.
pub fn score_details(scorer: &Scorer, text: &str) -> ScoreDetails {
    let w = &scorer.weights;
    let model = &scorer.model;
    let upper = text.to_ascii_uppercase();
    let mut d = ScoreDetails::default();

    // 1. WORDS
    for word in upper
        .split(|c: char| !c.is_ascii_alphabetic())
        .filter(|s| !s.is_empty())
    {
        d.word_count += 1;
        let len = word.len();
        let known = model.is_common_word(word);

        if known {
            d.dictionary += w.bonus_dictionary_word;
            d.dictionary_hits += 1;
        }

        if (w.short_word_min..=w.short_word_max).contains(&len) {
            d.word_length += w.bonus_word_length;
        }

        if !known && len > 2 {
            let vowels = word.bytes().filter(|b| VOWELS.contains(b)).count();
            if vowels == 0 {
                if len > 3 {
                    d.penalty += w.penalty_no_vowels;
                    d.penalized_words += 1;
                }
            } else if vowels as f32 / len as f32 > w.vowel_heavy_ratio {
                d.penalty += w.penalty_vowel_heavy;
                d.penalized_words += 1;
            }
        }
    }

    if let Some(phrase) = &scorer.phrase {
        if upper.contains(phrase.as_str()) {
            d.phrase_bonus = w.bonus_phrase;
        }
    }

    // 2. N-GRAMS (whitespace dropped, punctuation kept)
    let compact: Vec<u8> = upper
        .bytes()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();

    for pair in compact.windows(2) {
        if model.digrams.contains(&[pair[0], pair[1]]) {
            d.digram += w.bonus_digram;
            d.digram_hits += 1;
        }
    }
    for tri in compact.windows(3) {
        if model.trigrams.contains(&[tri[0], tri[1], tri[2]]) {
            d.trigram += w.bonus_trigram;
            d.trigram_hits += 1;
        }
    }

    // 3. DISTRIBUTION
    let profile = FrequencyProfile::from_text(&upper);
    for i in 0..ALPHABET_LEN {
        if let (Some(observed), Some(reference)) =
            (profile.percent(i), model.reference_percent(i))
        {
            d.frequency += (w.frequency_tolerance - (observed - reference).abs()).max(0.0);
        }
    }

    d.raw_total = d.dictionary + d.phrase_bonus + d.word_length + d.digram + d.trigram
        + d.frequency
        - d.penalty;
    d.total = d.raw_total.max(0.0);
    d
}
