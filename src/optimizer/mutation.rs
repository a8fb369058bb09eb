use crate::key::{letter_index, Key, ALPHABET_LEN};
use fastrand::Rng;

/// Letter pairs that make `cipher` decrypt to `plain`, or `None` when the two
/// spellings cannot come from one substitution (length mismatch, a cipher
/// letter needing two images, or two cipher letters sharing one).
pub fn word_pairs(cipher: &str, plain: &str) -> Option<Vec<(u8, u8)>> {
    phrase_pairs(&[cipher], &[plain])
}

/// Positional alignment of whole words, checked for consistency across all of
/// them.
pub fn phrase_pairs<C, P>(cipher_words: &[C], plain_words: &[P]) -> Option<Vec<(u8, u8)>>
where
    C: AsRef<str>,
    P: AsRef<str>,
{
    if cipher_words.len() != plain_words.len() {
        return None;
    }

    let mut forward: [Option<usize>; ALPHABET_LEN] = [None; ALPHABET_LEN];
    let mut backward: [Option<usize>; ALPHABET_LEN] = [None; ALPHABET_LEN];
    let mut pairs = Vec::new();

    for (cw, pw) in cipher_words.iter().zip(plain_words.iter()) {
        let (cw, pw) = (cw.as_ref().as_bytes(), pw.as_ref().as_bytes());
        if cw.len() != pw.len() {
            return None;
        }
        for (&c, &p) in cw.iter().zip(pw.iter()) {
            let ci = letter_index(c)?;
            let pi = letter_index(p)?;
            match (forward[ci], backward[pi]) {
                (None, None) => {
                    forward[ci] = Some(pi);
                    backward[pi] = Some(ci);
                    pairs.push((c.to_ascii_uppercase(), p.to_ascii_uppercase()));
                }
                (Some(f), Some(b)) if f == pi && b == ci => {}
                _ => return None,
            }
        }
    }
    Some(pairs)
}

/// Copy of `key` with every pair assigned. Pairs must be consistent (as
/// returned by [`phrase_pairs`]) so later assignments never undo earlier ones.
pub fn overlay(key: &Key, pairs: &[(u8, u8)]) -> Key {
    let mut next = *key;
    for &(c, p) in pairs {
        next.assign(c, p);
    }
    debug_assert!(next.is_bijective());
    next
}

pub fn overlay_word(key: &Key, cipher: &str, plain: &str) -> Option<Key> {
    word_pairs(cipher, plain).map(|pairs| overlay(key, &pairs))
}

/// Unordered ciphertext index pairs `(a, b)`, `a < b`, lexicographic, keeping
/// only pairs where at least one letter occurs in the message. Swapping two
/// absent letters never changes the decryption.
pub fn swap_pairs(present: &[bool; ALPHABET_LEN], shuffle_seed: Option<u64>) -> Vec<(usize, usize)> {
    let mut pairs = Vec::with_capacity(ALPHABET_LEN * (ALPHABET_LEN - 1) / 2);
    for a in 0..ALPHABET_LEN {
        for b in (a + 1)..ALPHABET_LEN {
            if present[a] || present[b] {
                pairs.push((a, b));
            }
        }
    }
    if let Some(seed) = shuffle_seed {
        Rng::with_seed(seed).shuffle(&mut pairs);
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phrase_pairs_rejects_inconsistent_alignment() {
        // X would need to decrypt to both T and O.
        assert!(phrase_pairs(&["XY", "XZ"], &["TO", "OF"]).is_none());
        // Y and Z cannot both decrypt to O.
        assert!(phrase_pairs(&["XY", "WZ"], &["TO", "GO"]).is_none());
    }

    #[test]
    fn test_phrase_pairs_dedupes_repeated_letters() {
        let pairs = phrase_pairs(&["ABC", "AB"], &["THE", "TH"]).unwrap();
        assert_eq!(pairs, vec![(b'A', b'T'), (b'B', b'H'), (b'C', b'E')]);
    }

    #[test]
    fn test_swap_pairs_skips_absent_letters() {
        let mut present = [false; ALPHABET_LEN];
        present[0] = true;
        let pairs = swap_pairs(&present, None);
        assert_eq!(pairs.len(), ALPHABET_LEN - 1);
        assert!(pairs.iter().all(|&(a, _)| a == 0));
    }

    #[test]
    fn test_all_pairs_lexicographic() {
        let pairs = swap_pairs(&[true; ALPHABET_LEN], None);
        assert_eq!(pairs.len(), 325);
        assert_eq!(pairs[0], (0, 1));
        assert_eq!(pairs[1], (0, 2));
        assert_eq!(pairs[324], (24, 25));
    }
}
