use super::LanguageModel;
use crate::error::{CfResult, CipherForgeError};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Reads a tab-separated language table:
///
/// ```text
/// # kind    value   percent
/// letter    E       12.70
/// word      THE
/// digram    TH
/// trigram   ING
/// ```
pub fn load_language_model<R: Read>(reader: R) -> CfResult<LanguageModel> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .comment(Some(b'#'))
        .from_reader(reader);

    let mut model = LanguageModel::empty();
    let mut letters = 0;

    for (row_idx, result) in rdr.records().enumerate() {
        let rec = result?;
        let row = row_idx + 1;
        if rec.len() < 2 {
            if rec.iter().all(|f| f.trim().is_empty()) {
                continue;
            }
            return Err(CipherForgeError::Validation(format!(
                "row {}: expected '<kind>\\t<value>'",
                row
            )));
        }

        let kind = rec[0].trim().to_ascii_lowercase();
        let value = rec[1].trim();

        let ok = match kind.as_str() {
            "letter" => {
                let pct: f32 = rec
                    .get(2)
                    .and_then(|s| s.trim().parse().ok())
                    .ok_or_else(|| {
                        CipherForgeError::Validation(format!(
                            "row {}: letter '{}' needs a numeric percentage",
                            row, value
                        ))
                    })?;
                let single = value.len() == 1 && model.set_letter_freq(value.as_bytes()[0], pct);
                if single {
                    letters += 1;
                }
                single
            }
            "word" => {
                let valid = is_letters(value, None);
                if valid {
                    model.add_word(value);
                }
                valid
            }
            "digram" => {
                let valid = is_letters(value, Some(2));
                if valid {
                    model.add_digram(value);
                }
                valid
            }
            "trigram" => {
                let valid = is_letters(value, Some(3));
                if valid {
                    model.add_trigram(value);
                }
                valid
            }
            other => {
                return Err(CipherForgeError::Validation(format!(
                    "row {}: unknown kind '{}'",
                    row, other
                )))
            }
        };

        if !ok {
            return Err(CipherForgeError::Validation(format!(
                "row {}: invalid {} '{}'",
                row, kind, value
            )));
        }
    }

    if letters == 0 {
        return Err(CipherForgeError::Validation(
            "language table has no letter frequencies".to_string(),
        ));
    }

    debug!(
        "Loaded language table: {} letters, {} words, {} digrams, {} trigrams",
        letters,
        model.common_words.len(),
        model.digrams.len(),
        model.trigrams.len()
    );

    Ok(model)
}

fn is_letters(value: &str, len: Option<usize>) -> bool {
    !value.is_empty()
        && len.map_or(true, |n| value.len() == n)
        && value.bytes().all(|b| b.is_ascii_alphabetic())
}

pub fn load_language_file<P: AsRef<Path>>(path: P) -> CfResult<LanguageModel> {
    let file = File::open(path.as_ref())?;
    load_language_model(file)
}
