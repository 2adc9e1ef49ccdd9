// badwords/src/main.rs
//! badwords entry point.
//!
//! Parses arguments, sets up logging, builds the filter or moderation client
//! and dispatches to the selected command.

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, LevelFilter};
use std::io;
use std::process::ExitCode;

use badwords::cli::{Cli, Commands};
use badwords::commands::{self, clean::CleanOptions, moderate::ModerationInput};
use badwords::logger;
use badwords::utils::input::read_input;
use badwords_core::{Filter, ModerationConfig, OpenModeratorClient, ProfanityCheckConfig};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Cli::parse();

    if args.quiet {
        logger::init_logger(Some(LevelFilter::Off));
    } else if args.debug {
        logger::init_logger(Some(LevelFilter::Debug));
    } else {
        logger::init_logger(None);
    }

    // A missing .env file is not an error.
    if let Ok(path) = dotenvy::dotenv() {
        debug!("Loaded environment from {}", path.display());
    }

    match args.command {
        Commands::Clean(clean_args) => {
            let config = commands::resolve_config(args.config.as_deref(), clean_args.filter.to_config())?;
            let filter = Filter::new(&config).context("Failed to build filter")?;
            let opts = CleanOptions {
                input: read_input(&clean_args.input)?,
                stats: clean_args.stats,
            };
            commands::clean::run_clean(&filter, &opts, &mut io::stdout().lock(), &mut io::stderr())?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Check(check_args) => {
            let config = commands::resolve_config(args.config.as_deref(), check_args.filter.to_config())?;
            let filter = Filter::new(&config).context("Failed to build filter")?;
            let input = read_input(&check_args.input)?;
            let profane = commands::check::run_check(&filter, &input, &mut io::stdout().lock())?;
            Ok(if profane { ExitCode::from(1) } else { ExitCode::SUCCESS })
        }
        Commands::Moderate(moderate_args) => {
            let file_config = commands::resolve_config(args.config.as_deref(), Default::default())?;
            let moderation = ModerationConfig {
                api_key: moderate_args.api_key.or(file_config.moderation.api_key),
                base_url: moderate_args.base_url.or(file_config.moderation.base_url),
            };
            let client = OpenModeratorClient::from_config(&moderation);
            let check_config = ProfanityCheckConfig {
                check_manual_profanity_list: moderate_args.check_manual_list,
                provider: moderate_args.provider.into(),
            };

            let text;
            let input = match &moderate_args.image {
                Some(path) => ModerationInput::Image(path),
                None => {
                    text = read_input(&moderate_args.input)?;
                    ModerationInput::Text(&text)
                }
            };
            commands::moderate::run_moderate(&client, input, &check_config, &mut io::stdout().lock())
                .await
                .context("Moderation request failed")?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
