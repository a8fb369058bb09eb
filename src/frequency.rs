use crate::key::{index_letter, letter_index, ALPHABET_LEN};
use std::collections::HashMap;

/// Observed letter distribution of a text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyProfile {
    counts: [usize; ALPHABET_LEN],
    total: usize,
}

impl FrequencyProfile {
    pub fn from_text(text: &str) -> Self {
        let mut counts = [0usize; ALPHABET_LEN];
        let mut total = 0;
        for b in text.bytes() {
            if let Some(i) = letter_index(b) {
                counts[i] += 1;
                total += 1;
            }
        }
        Self { counts, total }
    }

    pub fn total_letters(&self) -> usize {
        self.total
    }

    /// True when the text held no letters at all.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Number of distinct letters observed.
    pub fn len(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    pub fn count(&self, idx: usize) -> usize {
        self.counts[idx]
    }

    /// Percentage of the text made up by letter `idx`, or `None` if absent.
    pub fn percent(&self, idx: usize) -> Option<f32> {
        let count = self.counts[idx];
        if count == 0 {
            None
        } else {
            Some(count as f32 / self.total as f32 * 100.0)
        }
    }

    /// Present letters only, in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, f32)> + '_ {
        (0..ALPHABET_LEN).filter_map(|i| self.percent(i).map(|pct| (index_letter(i), pct)))
    }

    pub fn presence(&self) -> [bool; ALPHABET_LEN] {
        let mut present = [false; ALPHABET_LEN];
        for (slot, &count) in present.iter_mut().zip(self.counts.iter()) {
            *slot = count > 0;
        }
        present
    }

    /// Present letter indices sorted by descending count, ties alphabetical.
    pub fn ranked(&self) -> Vec<usize> {
        let mut ranked: Vec<usize> = (0..ALPHABET_LEN).filter(|&i| self.counts[i] > 0).collect();
        ranked.sort_by(|&a, &b| self.counts[b].cmp(&self.counts[a]).then(a.cmp(&b)));
        ranked
    }
}

/// Alphabetic runs of `text`, uppercased.
pub fn words(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_ascii_alphabetic())
        .filter(|w| !w.is_empty())
        .map(|w| w.to_ascii_uppercase())
        .collect()
}

pub fn has_distinct_letters(word: &str) -> bool {
    let mut seen = [false; ALPHABET_LEN];
    for b in word.bytes() {
        match letter_index(b) {
            Some(i) if !seen[i] => seen[i] = true,
            _ => return false,
        }
    }
    true
}

/// Word occurrence counts that remember first-appearance order, so that
/// "most frequent" is reproducible when counts tie.
#[derive(Debug, Clone, Default)]
pub struct WordStats {
    order: Vec<String>,
    counts: HashMap<String, usize>,
}

impl WordStats {
    pub fn from_text(text: &str) -> Self {
        let mut stats = Self::default();
        for w in words(text) {
            match stats.counts.get_mut(&w) {
                Some(n) => *n += 1,
                None => {
                    stats.counts.insert(w.clone(), 1);
                    stats.order.push(w);
                }
            }
        }
        stats
    }

    pub fn count(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Most frequent word of `len` letters satisfying `filter`; the earliest
    /// seen wins a tie.
    pub fn most_frequent<F>(&self, len: usize, filter: F) -> Option<&str>
    where
        F: Fn(&str) -> bool,
    {
        let mut best: Option<(&str, usize)> = None;
        for w in &self.order {
            if w.len() != len || !filter(w.as_str()) {
                continue;
            }
            let n = self.counts[w];
            if best.map_or(true, |(_, m)| n > m) {
                best = Some((w.as_str(), n));
            }
        }
        best.map(|(w, _)| w)
    }
}
