use crate::error::{CfResult, CipherForgeError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const ALPHABET_STR: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const ALPHABET_LEN: usize = 26;

/// Rendered in serialized keys for plaintext letters with no known source.
pub const PLACEHOLDER: u8 = b'?';

/// Case-insensitive index of an ASCII letter in `A..=Z`.
#[inline(always)]
pub fn letter_index(b: u8) -> Option<usize> {
    if b.is_ascii_alphabetic() {
        Some((b.to_ascii_uppercase() - b'A') as usize)
    } else {
        None
    }
}

#[inline(always)]
pub fn index_letter(idx: usize) -> u8 {
    ALPHABET[idx]
}

/// A bijective substitution from ciphertext letters to plaintext letters.
///
/// `images[c]` holds the plaintext index for ciphertext index `c`. Every
/// mutator goes through a swap, so the array is always a permutation of
/// `0..26`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Key {
    images: [u8; ALPHABET_LEN],
}

impl Default for Key {
    fn default() -> Self {
        Self::identity()
    }
}

impl Key {
    pub fn identity() -> Self {
        let mut images = [0u8; ALPHABET_LEN];
        for (i, slot) in images.iter_mut().enumerate() {
            *slot = i as u8;
        }
        Self { images }
    }

    /// Wraps a cipher-to-plain index table, rejecting anything that is not a
    /// permutation of `0..26`.
    pub fn from_images(images: [u8; ALPHABET_LEN]) -> CfResult<Self> {
        let key = Self { images };
        if key.is_bijective() {
            Ok(key)
        } else {
            Err(CipherForgeError::InvalidKey(format!(
                "{:?} is not a permutation",
                images
            )))
        }
    }

    /// Builds a key from a cipher-to-plain table (`plain[i]` is the image of
    /// ciphertext letter `ALPHABET[i]`).
    pub fn from_plain_alphabet(plain: &str) -> CfResult<Self> {
        let bytes = plain.as_bytes();
        if bytes.len() != ALPHABET_LEN {
            return Err(CipherForgeError::InvalidKey(format!(
                "expected {} letters, got {}",
                ALPHABET_LEN,
                bytes.len()
            )));
        }

        let mut images = [0u8; ALPHABET_LEN];
        let mut seen = [false; ALPHABET_LEN];
        for (i, &b) in bytes.iter().enumerate() {
            let p = letter_index(b).ok_or_else(|| {
                CipherForgeError::InvalidKey(format!("'{}' is not a letter", b as char))
            })?;
            if seen[p] {
                return Err(CipherForgeError::InvalidKey(format!(
                    "plaintext letter '{}' appears twice",
                    index_letter(p) as char
                )));
            }
            seen[p] = true;
            images[i] = p as u8;
        }
        Ok(Self { images })
    }

    /// Parses the inverse-indexed form produced by [`Key::serialize`].
    ///
    /// `?` positions are filled with the unused ciphertext letters in
    /// alphabetical order.
    pub fn parse(serialized: &str) -> CfResult<Self> {
        let bytes = serialized.trim().as_bytes();
        if bytes.len() != ALPHABET_LEN {
            return Err(CipherForgeError::InvalidKey(format!(
                "expected {} symbols, got {}",
                ALPHABET_LEN,
                bytes.len()
            )));
        }

        let mut inverse = [None; ALPHABET_LEN];
        let mut used = [false; ALPHABET_LEN];
        for (p, &b) in bytes.iter().enumerate() {
            if b == PLACEHOLDER {
                continue;
            }
            let c = letter_index(b).ok_or_else(|| {
                CipherForgeError::InvalidKey(format!("'{}' is not a letter", b as char))
            })?;
            if used[c] {
                return Err(CipherForgeError::InvalidKey(format!(
                    "ciphertext letter '{}' appears twice",
                    index_letter(c) as char
                )));
            }
            used[c] = true;
            inverse[p] = Some(c);
        }

        let mut leftovers = (0..ALPHABET_LEN).filter(|&c| !used[c]);
        let mut images = [0u8; ALPHABET_LEN];
        for (p, slot) in inverse.iter().enumerate() {
            let c = match slot {
                Some(c) => *c,
                // Counts match: every placeholder consumes exactly one leftover.
                None => leftovers.next().ok_or_else(|| {
                    CipherForgeError::InvalidKey("placeholder without a free letter".into())
                })?,
            };
            images[c] = p as u8;
        }
        Ok(Self { images })
    }

    /// Plaintext index for a ciphertext index.
    #[inline(always)]
    pub fn image(&self, cipher_idx: usize) -> usize {
        self.images[cipher_idx] as usize
    }

    /// Ciphertext index whose image is `plain_idx`.
    #[inline(always)]
    pub fn preimage(&self, plain_idx: usize) -> usize {
        // Always found: images is a permutation.
        self.images
            .iter()
            .position(|&p| p as usize == plain_idx)
            .unwrap_or(plain_idx)
    }

    /// Uppercase plaintext letter for a ciphertext letter (either case).
    pub fn plain_for(&self, cipher: u8) -> Option<u8> {
        letter_index(cipher).map(|c| index_letter(self.image(c)))
    }

    /// Exchanges the plaintext images of two ciphertext indices.
    #[inline(always)]
    pub fn swap_images(&mut self, a: usize, b: usize) {
        self.images.swap(a, b);
    }

    /// Points `cipher` at `plain`, handing `cipher`'s old image to whichever
    /// ciphertext letter previously decrypted to `plain`.
    ///
    /// Returns `false` (and leaves the key untouched) if either byte is not a
    /// letter.
    pub fn assign(&mut self, cipher: u8, plain: u8) -> bool {
        match (letter_index(cipher), letter_index(plain)) {
            (Some(c), Some(p)) => {
                let holder = self.preimage(p);
                self.swap_images(c, holder);
                true
            }
            _ => false,
        }
    }

    pub fn is_bijective(&self) -> bool {
        let mut seen = [false; ALPHABET_LEN];
        for &p in &self.images {
            let p = p as usize;
            if p >= ALPHABET_LEN || seen[p] {
                return false;
            }
            seen[p] = true;
        }
        true
    }

    /// Substitutes one byte, preserving case; non-letters pass through.
    #[inline(always)]
    pub fn decrypt_byte(&self, b: u8) -> u8 {
        if b.is_ascii_uppercase() {
            index_letter(self.image((b - b'A') as usize))
        } else if b.is_ascii_lowercase() {
            index_letter(self.image((b - b'a') as usize)).to_ascii_lowercase()
        } else {
            b
        }
    }

    pub fn apply(&self, text: &str) -> String {
        text.chars()
            .map(|ch| {
                if ch.is_ascii_alphabetic() {
                    self.decrypt_byte(ch as u8) as char
                } else {
                    ch
                }
            })
            .collect()
    }

    /// `result[p]` is the ciphertext letter that decrypts to `ALPHABET[p]`.
    pub fn serialize(&self) -> String {
        self.serialize_observed(&[true; ALPHABET_LEN])
    }

    /// Like [`Key::serialize`], but ciphertext letters absent from the
    /// message (per `present`, indexed by ciphertext letter) are rendered as
    /// `?` since the search never had evidence for them.
    pub fn serialize_observed(&self, present: &[bool; ALPHABET_LEN]) -> String {
        let mut out = vec![PLACEHOLDER; ALPHABET_LEN];
        for (c, &p) in self.images.iter().enumerate() {
            if present[c] {
                out[p as usize] = index_letter(c);
            }
        }
        String::from_utf8_lossy(&out).into_owned()
    }

    /// `(cipher, plain)` letter pairs in ciphertext alphabetical order.
    pub fn mapping(&self) -> impl Iterator<Item = (char, char)> + '_ {
        self.images
            .iter()
            .enumerate()
            .map(|(c, &p)| (index_letter(c) as char, index_letter(p as usize) as char))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Key({})", self.serialize())
    }
}

impl FromStr for Key {
    type Err = CipherForgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Key::parse(s)
    }
}

impl TryFrom<String> for Key {
    type Error = CipherForgeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Key::parse(&value)
    }
}

impl From<Key> for String {
    fn from(key: Key) -> Self {
        key.serialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assign_repairs_bijection() {
        let mut key = Key::identity();
        assert!(key.assign(b'a', b'Q'));
        assert_eq!(key.plain_for(b'A'), Some(b'Q'));
        // Q's old source inherits A's old image.
        assert_eq!(key.plain_for(b'Q'), Some(b'A'));
        assert!(key.is_bijective());
    }

    #[test]
    fn test_assign_rejects_non_letters() {
        let mut key = Key::identity();
        assert!(!key.assign(b'1', b'A'));
        assert_eq!(key, Key::identity());
    }

    #[test]
    fn test_preimage_inverts_image() {
        let key = Key::from_plain_alphabet("QWERTYUIOPASDFGHJKLZXCVBNM").unwrap();
        for c in 0..ALPHABET_LEN {
            assert_eq!(key.preimage(key.image(c)), c);
        }
    }
}
