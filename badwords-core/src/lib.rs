// badwords-core/src/lib.rs
//! # badwords Core Library
//!
//! `badwords-core` provides word-boundary-aware profanity detection and
//! redaction. Given a blacklist of terms it answers whether a string contains
//! one of them as a whole word, and produces a copy with flagged words masked
//! by a placeholder character.
//!
//! ## Modules
//!
//! * `config`: `FilterConfig`, the bundled default word list, loading and merging.
//! * `compiler`: escaping of terms and compilation of all patterns.
//! * `blacklist`: the blacklist and exclusion (whitelist) store.
//! * `matcher`: word-boundary matching of terms against text.
//! * `tokenizer`: splitting input into tokens and joining them back.
//! * `redactor`: masking a flagged token.
//! * `engine`: the `CensorEngine` trait.
//! * `filter`: `Filter`, the concrete engine.
//! * `profanity_match`: reporting types for flagged tokens.
//! * `headless`: one-shot convenience functions.
//! * `moderation`: async client for the remote OpenModerator API.
//!
//! ## Usage Example
//!
//! ```rust
//! use badwords_core::{CensorEngine, Filter, FilterConfig};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let mut filter = Filter::new(&FilterConfig::default())?;
//!
//!     assert!(filter.is_profane("Don't be an ash0le"));
//!     assert_eq!(filter.clean("Don't be an ash0le"), "Don't be an ******");
//!
//!     filter.remove_words(["ash0le"]);
//!     assert!(!filter.is_profane("ash0le"));
//!
//!     filter.add_words(["ash0le"])?;
//!     assert!(filter.is_profane("ash0le"));
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! `is_profane`, `clean` and `remove_words` cannot fail. Construction returns
//! `anyhow::Result` so that invalid pattern overrides surface immediately;
//! the typed cause is a [`BadwordsError`].
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod blacklist;
pub mod compiler;
pub mod config;
pub mod engine;
pub mod errors;
pub mod filter;
pub mod headless;
pub mod matcher;
pub mod moderation;
pub mod profanity_match;
pub mod redactor;
pub mod tokenizer;

/// Re-exports the configuration types and functions.
pub use config::{
    load_default_words,
    merge_configs,
    FilterConfig,
    ModerationConfig,
    DEFAULT_PLACEHOLDER,
    MAX_PATTERN_LENGTH,
};

/// Re-exports the custom error type for clear error reporting.
pub use errors::BadwordsError;

/// Re-exports the engine trait and its implementation.
pub use engine::CensorEngine;
pub use filter::Filter;

pub use blacklist::{BlacklistStore, Term};
pub use compiler::escape_term;
pub use profanity_match::{summarize, ProfanityMatch, ProfanitySummaryItem};
pub use tokenizer::{Tokenizer, Tokens};

/// Re-exports types and functions for one-shot, non-interactive use.
pub use headless::{headless_clean_string, headless_is_profane};

pub use moderation::{
    ImagePayload,
    ModerationResult,
    Moderator,
    OpenModeratorClient,
    ProfanityCheckConfig,
    Provider,
};
