//! Implementations of the `badwords` subcommands.

pub mod check;
pub mod clean;
pub mod moderate;

use anyhow::Result;
use log::debug;
use std::path::Path;

use badwords_core::{merge_configs, FilterConfig};

/// Loads the optional config file and layers command-line flags over it.
pub fn resolve_config(config_path: Option<&Path>, overlay: FilterConfig) -> Result<FilterConfig> {
    let base = match config_path {
        Some(path) => FilterConfig::load_from_file(path)?,
        None => {
            debug!("No configuration file given; using defaults.");
            FilterConfig::default()
        }
    };
    let merged = merge_configs(base, overlay);
    merged.validate()?;
    Ok(merged)
}
