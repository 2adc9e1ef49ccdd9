//! errors.rs - Custom error types for the badwords-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in the `badwords-core` library.
///
/// Marked `#[non_exhaustive]` so new variants can be added without breaking
/// downstream `match` statements.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum BadwordsError {
    #[error("Failed to compile pattern '{0}': {1}")]
    PatternCompilation(String, regex::Error),

    #[error("Pattern '{0}': length ({1}) exceeds maximum allowed ({2})")]
    PatternLengthExceeded(String, usize, usize),

    #[error("OpenModerator API key is not set. Pass it in configuration or set OPEN_MODERATOR_API_KEY")]
    MissingApiKey,

    #[error("Moderation request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Moderation API returned HTTP status {0}")]
    HttpStatus(u16),
}
