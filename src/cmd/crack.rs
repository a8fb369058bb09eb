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
pub struct CrackArgs {
    /// Ciphertext file.
    pub input: PathBuf,

    #[command(flatten)]
    pub config: Config,

    /// Emit the report as JSON instead of tables.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: CrackArgs, config: &Config, model: Arc<LanguageModel>) {
    info!("📂 Loading Ciphertext: {}", args.input.display());
    let ciphertext = fs::read_to_string(&args.input).unwrap_or_else(|e| {
        error!("❌ Could not read '{}': {}", args.input.display(), e);
        process::exit(1);
    });

    info!(
        "🔥 Cracking {} characters (pair budget {}, {})",
        ciphertext.len(),
        config.search.pair_swap_budget,
        config.search.swap_strategy
    );
    let report = api::crack_text(&ciphertext, config, model);

    if args.json {
        match serde_json::to_string_pretty(&report) {
            Ok(s) => println!("{}", s),
            Err(e) => {
                error!("❌ Failed to serialize report: {}", e);
                process::exit(1);
            }
        }
        return;
    }

    println!("\n=== 🏆 FINAL RESULT ===");
    reports::print_key_table(api::reference_alphabet(), &report.cipher_alphabet);
    println!("\nPlaintext:\n{}", report.plaintext);
    println!("\nScore: {:.2}", report.score);
    println!("Confidence: {}", report.confidence.label());
    reports::print_stage_report(&report.stages);
    reports::print_score_breakdown(&[("Best".to_string(), report.details)]);
}
