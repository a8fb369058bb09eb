use crate::config::Config;
use crate::error::CfResult;
use crate::frequency::FrequencyProfile;
use crate::key::{Key, ALPHABET_STR};
use crate::language::{loader, LanguageModel};
use crate::optimizer::{OptimizationOptions, Optimizer, StageReport};
use crate::scorer::{Confidence, ScoreDetails, Scorer};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Everything the reporting layer needs about a solved message.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CrackReport {
    pub key: Key,
    /// Ciphertext letter for each plaintext letter under `ABC..Z`; `?` for
    /// letters the message never used.
    pub cipher_alphabet: String,
    pub mapping: BTreeMap<char, char>,
    pub plaintext: String,
    pub score: f32,
    pub confidence: Confidence,
    pub details: ScoreDetails,
    pub stages: Vec<StageReport>,
    pub evaluations: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DecryptionReport {
    pub key: Key,
    pub plaintext: String,
    pub confidence: Confidence,
    pub details: ScoreDetails,
}

pub fn reference_alphabet() -> &'static str {
    ALPHABET_STR
}

/// Built-in English unless a table path is supplied.
pub fn load_language<P: AsRef<Path>>(path: Option<P>) -> CfResult<Arc<LanguageModel>> {
    match path {
        Some(p) => {
            info!("Loading language table: {}", p.as_ref().display());
            Ok(Arc::new(loader::load_language_file(p)?))
        }
        None => Ok(Arc::new(LanguageModel::english())),
    }
}

/// Runs the full search on `ciphertext`.
pub fn crack_text(ciphertext: &str, config: &Config, model: Arc<LanguageModel>) -> CrackReport {
    let scorer = Arc::new(Scorer::from_config(model, config));
    let optimizer = Optimizer::new(scorer.clone(), OptimizationOptions::from(config));
    let result = optimizer.run(ciphertext);

    let details = scorer.score_details(result.plaintext());
    let mapping = result
        .key()
        .mapping()
        .filter(|(c, _)| result.present[(*c as u8 - b'A') as usize])
        .collect();

    CrackReport {
        key: *result.key(),
        cipher_alphabet: result.key().serialize_observed(&result.present),
        mapping,
        plaintext: result.best.plaintext.clone(),
        score: result.score(),
        confidence: Confidence::classify(result.score(), &config.thresholds),
        details,
        stages: result.stages,
        evaluations: result.evaluations,
    }
}

/// Applies a known serialized key and scores the result.
pub fn decrypt_with_key(
    ciphertext: &str,
    serialized_key: &str,
    config: &Config,
    model: Arc<LanguageModel>,
) -> CfResult<DecryptionReport> {
    let key = Key::parse(serialized_key)?;
    let scorer = Scorer::from_config(model, config);
    let plaintext = key.apply(ciphertext);
    let details = scorer.score_details(&plaintext);

    Ok(DecryptionReport {
        key,
        plaintext,
        confidence: Confidence::classify(details.total, &config.thresholds),
        details,
    })
}

/// Ciphertext letters present in `text`, for masking serialized keys.
pub fn presence(text: &str) -> [bool; 26] {
    FrequencyProfile::from_text(text).presence()
}
