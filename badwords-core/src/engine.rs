// badwords-core/src/engine.rs
//! Defines the core `CensorEngine` trait.
//!
//! The trait decouples front ends (the CLI, the headless helpers) from the
//! concrete filter so they can hold a `&dyn CensorEngine`.
//!
//! License: MIT OR APACHE 2.0

use crate::profanity_match::ProfanityMatch;

/// Read-only surface of a censorship engine.
pub trait CensorEngine: Send + Sync {
    /// Whether `text` contains a non-excluded blacklist term as a whole word.
    fn is_profane(&self, text: &str) -> bool;

    /// Returns `text` with every flagged token masked.
    ///
    /// The empty string maps to itself.
    fn clean(&self, text: &str) -> String;

    /// Lists every flagged token of `text` with its byte offsets, without
    /// modifying the input.
    fn find_matches(&self, text: &str) -> Vec<ProfanityMatch>;
}
