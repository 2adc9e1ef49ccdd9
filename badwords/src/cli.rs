//! This file defines the command-line interface (CLI) for the badwords
//! application, including all available commands and their arguments.
//! License: MIT OR Apache-2.0

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use badwords_core::{FilterConfig, Provider};

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "badwords",
    author = "Relay",
    version = env!("CARGO_PKG_VERSION"),
    about = "Detect and censor profanity in text",
    long_about = "badwords checks text against a blacklist of words using word-boundary aware, case-insensitive matching, and prints a copy with profane words masked. It can also forward text or images to the OpenModerator API for AI moderation.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all log output.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    /// Path to a YAML filter configuration.
    #[arg(long, short = 'c', value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the input with profane words masked.
    Clean(CleanArgs),
    /// Report whether the input contains profanity (exit code 1 if it does).
    Check(CheckArgs),
    /// Classify text or an image with the OpenModerator API.
    Moderate(ModerateArgs),
}

/// Where the text comes from.
#[derive(Args, Debug, Default)]
pub struct InputArgs {
    /// Text to process. Read from stdin when omitted.
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Read the text from a file instead.
    #[arg(long = "input-file", short = 'i', value_name = "FILE", conflicts_with = "text")]
    pub input_file: Option<PathBuf>,
}

/// Filter options shared by `clean` and `check`.
#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Start with an empty blacklist instead of the bundled one.
    #[arg(long = "empty-list")]
    pub empty_list: bool,

    /// Add a word to the blacklist (repeatable).
    #[arg(long = "word", short = 'w', value_name = "WORD")]
    pub words: Vec<String>,

    /// Never flag this word (repeatable).
    #[arg(long = "allow", short = 'a', value_name = "WORD")]
    pub allow: Vec<String>,

    /// Character used to mask profane words.
    #[arg(long, value_name = "CHAR")]
    pub placeholder: Option<char>,

    /// Regex of characters removed from a flagged word before masking.
    #[arg(long = "sanitize-regex", value_name = "REGEX")]
    pub sanitize_regex: Option<String>,

    /// Regex of characters replaced by the placeholder.
    #[arg(long = "replace-regex", value_name = "REGEX")]
    pub replace_regex: Option<String>,

    /// Regex used to split the input into words.
    #[arg(long = "split-regex", value_name = "REGEX")]
    pub split_regex: Option<String>,
}

impl FilterArgs {
    /// The flags as a config overlay for [`badwords_core::merge_configs`].
    pub fn to_config(&self) -> FilterConfig {
        FilterConfig {
            empty_list: self.empty_list,
            list: self.words.clone(),
            exclude: self.allow.clone(),
            placeholder: self.placeholder,
            regex: self.sanitize_regex.clone(),
            replace_regex: self.replace_regex.clone(),
            split_regex: self.split_regex.clone(),
            ..Default::default()
        }
    }
}

#[derive(Args, Debug)]
pub struct CleanArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub filter: FilterArgs,

    /// Print per-word match counts to stderr.
    #[arg(long)]
    pub stats: bool,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub filter: FilterArgs,
}

#[derive(Args, Debug)]
pub struct ModerateArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Classify an image file for NSFW content instead of text.
    #[arg(long, value_name = "FILE", conflicts_with_all = ["text", "input_file"])]
    pub image: Option<PathBuf>,

    /// Moderation backend for text.
    #[arg(long, value_enum, default_value_t = ProviderChoice::GooglePerspectiveApi)]
    pub provider: ProviderChoice,

    /// Ask the service to check its manual profanity list first.
    #[arg(long = "check-manual-list")]
    pub check_manual_list: bool,

    /// OpenModerator API key.
    #[arg(long = "api-key", env = "OPEN_MODERATOR_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Override the API origin.
    #[arg(long = "base-url", value_name = "URL")]
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ProviderChoice {
    /// OpenAI's Moderation API.
    Openai,
    /// Google's Perspective API.
    GooglePerspectiveApi,
    /// Google's Natural Language API.
    GoogleNaturalLanguageApi,
}

impl From<ProviderChoice> for Provider {
    fn from(choice: ProviderChoice) -> Self {
        match choice {
            ProviderChoice::Openai => Provider::OpenAi,
            ProviderChoice::GooglePerspectiveApi => Provider::GooglePerspectiveApi,
            ProviderChoice::GoogleNaturalLanguageApi => Provider::GoogleNaturalLanguageApi,
        }
    }
}
