pub mod english;
pub mod loader;

use crate::key::{letter_index, ALPHABET_LEN};
use std::collections::HashSet;

/// Reference statistics for the plaintext language.
///
/// Built once and shared read-only between the scorer and the key builder.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageModel {
    /// Percent per letter `A..=Z`; zero means the letter is not in the table.
    pub letter_freqs: [f32; ALPHABET_LEN],
    pub common_words: HashSet<String>,
    pub digrams: HashSet<[u8; 2]>,
    pub trigrams: HashSet<[u8; 3]>,
}

impl Default for LanguageModel {
    fn default() -> Self {
        Self::english()
    }
}

impl LanguageModel {
    pub fn english() -> Self {
        Self::from_tables(
            english::LETTER_FREQUENCIES,
            english::COMMON_WORDS,
            english::COMMON_DIGRAMS,
            english::COMMON_TRIGRAMS,
        )
    }

    /// Model with no words or n-grams; tables can be added field by field.
    pub fn empty() -> Self {
        Self {
            letter_freqs: [0.0; ALPHABET_LEN],
            common_words: HashSet::new(),
            digrams: HashSet::new(),
            trigrams: HashSet::new(),
        }
    }

    pub fn from_tables(
        letter_freqs: [f32; ALPHABET_LEN],
        words: &[&str],
        digrams: &[&str],
        trigrams: &[&str],
    ) -> Self {
        let mut model = Self::empty();
        model.letter_freqs = letter_freqs;
        for w in words {
            model.add_word(w);
        }
        for d in digrams {
            model.add_digram(d);
        }
        for t in trigrams {
            model.add_trigram(t);
        }
        model
    }

    pub fn add_word(&mut self, word: &str) {
        self.common_words.insert(word.trim().to_ascii_uppercase());
    }

    pub fn add_digram(&mut self, s: &str) -> bool {
        match s.trim().to_ascii_uppercase().as_bytes() {
            [a, b] => self.digrams.insert([*a, *b]),
            _ => false,
        }
    }

    pub fn add_trigram(&mut self, s: &str) -> bool {
        match s.trim().to_ascii_uppercase().as_bytes() {
            [a, b, c] => self.trigrams.insert([*a, *b, *c]),
            _ => false,
        }
    }

    pub fn set_letter_freq(&mut self, letter: u8, percent: f32) -> bool {
        match letter_index(letter) {
            Some(i) => {
                self.letter_freqs[i] = percent;
                true
            }
            None => false,
        }
    }

    /// Reference percentage for `idx`, `None` if the table omits it.
    pub fn reference_percent(&self, idx: usize) -> Option<f32> {
        let pct = self.letter_freqs[idx];
        if pct > 0.0 {
            Some(pct)
        } else {
            None
        }
    }

    /// All 26 letter indices by descending reference frequency, ties
    /// alphabetical.
    pub fn frequency_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..ALPHABET_LEN).collect();
        order.sort_by(|&a, &b| {
            self.letter_freqs[b]
                .total_cmp(&self.letter_freqs[a])
                .then(a.cmp(&b))
        });
        order
    }

    /// `word` must already be uppercase.
    #[inline(always)]
    pub fn is_common_word(&self, word: &str) -> bool {
        self.common_words.contains(word)
    }
}
