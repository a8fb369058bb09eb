#![allow(dead_code)]

use cipherforge::config::Config;
use cipherforge::key::Key;
use cipherforge::language::LanguageModel;
use cipherforge::scorer::Scorer;
use std::sync::Arc;

/// Plaintext letter `ALPHABET[i]` encrypts to `PERM[i]`. Read as a
/// serialized key, the same string is the decryption key.
pub const PERM: &str = "QWERTYUIOPASDFGHJKLZXCVBNM";

pub const TARGET: &str = "SEND THE MONEY TO ALICE";

pub fn encrypt(plaintext: &str, perm: &str) -> String {
    let perm = perm.as_bytes();
    plaintext
        .chars()
        .map(|ch| {
            if ch.is_ascii_uppercase() {
                perm[(ch as u8 - b'A') as usize] as char
            } else if ch.is_ascii_lowercase() {
                (perm[(ch as u8 - b'a') as usize] as char).to_ascii_lowercase()
            } else {
                ch
            }
        })
        .collect()
}

pub fn decryption_key(perm: &str) -> Key {
    Key::parse(perm).expect("test permutation must parse")
}

pub fn english() -> Arc<LanguageModel> {
    Arc::new(LanguageModel::english())
}

pub fn english_scorer() -> Scorer {
    Scorer::from_config(english(), &Config::default())
}

/// Tiny model with round numbers: no letter table, one word, one digram,
/// one trigram.
pub fn toy_model() -> Arc<LanguageModel> {
    let mut model = LanguageModel::empty();
    model.add_word("cat");
    model.add_digram("ca");
    model.add_trigram("cat");
    Arc::new(model)
}
