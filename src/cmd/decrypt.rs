use crate::reports;
use cipherforge::api;
use cipherforge::config::Config;
use cipherforge::language::LanguageModel;
use clap::Args;
use std::fs;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use tracing::{error, info};

#[derive(Args, Debug, Clone)]
pub struct DecryptArgs {
    /// Ciphertext file.
    pub input: PathBuf,

    /// Serialized key: the ciphertext letter for each of A..Z (`?` allowed).
    #[arg(short = 'K', long)]
    pub key: String,

    #[command(flatten)]
    pub config: Config,
}

pub fn run(args: DecryptArgs, config: &Config, model: Arc<LanguageModel>) {
    info!("📂 Loading Ciphertext: {}", args.input.display());
    let ciphertext = fs::read_to_string(&args.input).unwrap_or_else(|e| {
        error!("❌ Could not read '{}': {}", args.input.display(), e);
        process::exit(1);
    });

    let report = api::decrypt_with_key(&ciphertext, &args.key, config, model).unwrap_or_else(|e| {
        error!("❌ {}", e);
        process::exit(1);
    });

    let present = api::presence(&ciphertext);
    reports::print_key_table(
        api::reference_alphabet(),
        &report.key.serialize_observed(&present),
    );
    println!("\nPlaintext:\n{}", report.plaintext);
    println!("\nScore: {:.2}", report.details.total);
    println!("Confidence: {}", report.confidence.label());
    reports::print_score_breakdown(&[("Given".to_string(), report.details)]);
}
