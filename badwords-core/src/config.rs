//! Configuration management for `badwords-core`.
//!
//! This module defines the filter configuration and the bundled default word
//! list. It handles YAML deserialization of configuration files and provides
//! utilities for loading, merging, and validating them.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::{debug, info};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::compiler::compile_pattern;
use crate::errors::BadwordsError;

/// Maximum allowed length for a user-supplied regex pattern string.
pub const MAX_PATTERN_LENGTH: usize = 500;

/// Character used to mask profane words when none is configured.
pub const DEFAULT_PLACEHOLDER: char = '*';

/// Characters stripped from a flagged word before masking.
pub const DEFAULT_SANITIZE_PATTERN: &str = r"[^a-zA-Z0-9|$@]|\^";

/// Characters of a flagged word that become placeholders.
pub const DEFAULT_REPLACE_PATTERN: &str = r"[A-Za-z0-9_]";

/// Token boundary rule: a zero-width ASCII word boundary.
pub const DEFAULT_SPLIT_PATTERN: &str = r"(?-u:\b)";

static DEFAULT_WORDS: OnceCell<Vec<String>> = OnceCell::new();

/// Settings for the remote moderation client.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ModerationConfig {
    /// API key for OpenModerator. Falls back to `OPEN_MODERATOR_API_KEY`.
    pub api_key: Option<String>,
    /// Override for the API origin, e.g. a proxy.
    pub base_url: Option<String>,
}

/// Construction options for a [`Filter`](crate::Filter).
///
/// Every field has a default, so an empty YAML document is a valid config.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Start with no default terms.
    pub empty_list: bool,
    /// Extra terms, appended after the default list (or the whole list with `empty_list`).
    pub list: Vec<String>,
    /// Initial exclusion set (whitelist).
    pub exclude: Vec<String>,
    /// Masking character.
    pub placeholder: Option<char>,
    /// Sanitize pattern: characters removed from a flagged word.
    pub regex: Option<String>,
    /// Replace pattern: characters turned into placeholders.
    pub replace_regex: Option<String>,
    /// Split pattern used to tokenize input.
    pub split_regex: Option<String>,
    pub moderation: ModerationConfig,
}

#[derive(Debug, Deserialize)]
struct WordList {
    words: Vec<String>,
}

impl FilterConfig {
    /// Loads a filter configuration from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading filter configuration from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: FilterConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        config
            .validate()
            .with_context(|| format!("Invalid configuration in {}", path.display()))?;
        info!(
            "Loaded configuration from {} ({} extra terms, {} exclusions).",
            path.display(),
            config.list.len(),
            config.exclude.len()
        );

        Ok(config)
    }

    /// Compiles every pattern override to make sure it is usable.
    pub fn validate(&self) -> Result<(), BadwordsError> {
        let overrides = [
            ("regex", &self.regex),
            ("replace_regex", &self.replace_regex),
            ("split_regex", &self.split_regex),
        ];
        for (name, pattern) in overrides {
            if let Some(pattern) = pattern {
                compile_pattern(name, pattern)?;
            }
        }
        Ok(())
    }

    pub fn placeholder(&self) -> char {
        self.placeholder.unwrap_or(DEFAULT_PLACEHOLDER)
    }

    pub fn sanitize_pattern(&self) -> &str {
        self.regex.as_deref().unwrap_or(DEFAULT_SANITIZE_PATTERN)
    }

    pub fn replace_pattern(&self) -> &str {
        self.replace_regex.as_deref().unwrap_or(DEFAULT_REPLACE_PATTERN)
    }

    pub fn split_pattern(&self) -> &str {
        self.split_regex.as_deref().unwrap_or(DEFAULT_SPLIT_PATTERN)
    }
}

/// Returns the bundled default word list.
///
/// The embedded YAML is parsed on first use; later calls share the result.
pub fn load_default_words() -> Result<&'static [String]> {
    let words = DEFAULT_WORDS.get_or_try_init(|| -> Result<Vec<String>> {
        debug!("Loading default word list from embedded string...");
        let default_yaml = include_str!("../config/default_words.yaml");
        let list: WordList =
            serde_yml::from_str(default_yaml).context("Failed to parse default word list")?;
        debug!("Loaded {} default words.", list.words.len());
        Ok(list.words)
    })?;
    Ok(words.as_slice())
}

/// Merges an overlay configuration (e.g. command-line flags) over a base one.
///
/// Lists are appended; scalar options set in the overlay replace the base.
pub fn merge_configs(base: FilterConfig, overlay: FilterConfig) -> FilterConfig {
    debug!(
        "merge_configs called. Base terms: {}, overlay terms: {}",
        base.list.len(),
        overlay.list.len()
    );

    let mut list = base.list;
    list.extend(overlay.list);
    let mut exclude = base.exclude;
    exclude.extend(overlay.exclude);

    FilterConfig {
        empty_list: base.empty_list || overlay.empty_list,
        list,
        exclude,
        placeholder: overlay.placeholder.or(base.placeholder),
        regex: overlay.regex.or(base.regex),
        replace_regex: overlay.replace_regex.or(base.replace_regex),
        split_regex: overlay.split_regex.or(base.split_regex),
        moderation: ModerationConfig {
            api_key: overlay.moderation.api_key.or(base.moderation.api_key),
            base_url: overlay.moderation.base_url.or(base.moderation.base_url),
        },
    }
}
