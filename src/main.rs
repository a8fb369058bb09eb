use cipherforge::api;
use cipherforge::config::Config;
use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use std::process;
use tracing::{error, info, warn, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Tab-separated language table (defaults to built-in English).
    #[arg(global = true, short, long)]
    language: Option<String>,

    /// JSON config file; explicit command-line flags take precedence.
    #[arg(global = true, long = "config")]
    config_file: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Crack(cmd::crack::CrackArgs),
    Decrypt(cmd::decrypt::DecryptArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    info!("🔐 Initializing CipherForge...");

    let (cli_config, sub_matches) = match &cli.command {
        Commands::Crack(args) => (&args.config, matches.subcommand_matches("crack")),
        Commands::Decrypt(args) => (&args.config, matches.subcommand_matches("decrypt")),
    };

    // 1. Resolve Config: JSON file with CLI overrides, or CLI alone
    let config = match &cli.config_file {
        Some(path) => {
            info!("⚙️  Loading Config from: {}", path);
            let mut file_config = Config::load_from_file(path).unwrap_or_else(|e| {
                error!("{}", e);
                process::exit(1);
            });
            if let Some(sub) = sub_matches {
                file_config.merge_from_cli(cli_config, sub);
            }
            file_config
        }
        None => cli_config.clone(),
    };

    if let Err(e) = config.validate() {
        error!("{}", e);
        process::exit(1);
    }

    if config.search.get_calibration_phrase().is_none() {
        warn!("⚠️  Calibration phrase disabled: no phrase bonus or overlay.");
    }

    // 2. Load Language Model
    let model = api::load_language(cli.language.as_ref()).unwrap_or_else(|e| {
        error!("❌ Failed to load language table: {}", e);
        process::exit(1);
    });

    // 3. Execute
    match cli.command {
        Commands::Crack(args) => cmd::crack::run(args, &config, model),
        Commands::Decrypt(args) => cmd::decrypt::run(args, &config, model),
    }
}
