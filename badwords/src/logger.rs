//! Logger setup for the `badwords` CLI.
//!
//! License: MIT OR Apache-2.0

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Installs `env_logger`.
///
/// `Some(level)` forces that level for every module; `None` honours
/// `RUST_LOG`, defaulting to `warn`. Safe to call more than once: later calls
/// are ignored, which keeps tests that share a process working.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.format_timestamp(None).target(env_logger::Target::Stderr);
    let _ = builder.try_init();
}
