//! compiler.rs - Builds and compiles the regular expressions used by the filter.
//!
//! Two kinds of patterns go through here: the option patterns a caller may
//! override (sanitize, replace, split), and the per-term match patterns built
//! from blacklist entries. Option patterns are user-written regexes and are
//! length-checked; term patterns are generated from escaped literals.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use regex::{Regex, RegexBuilder};

use crate::config::MAX_PATTERN_LENGTH;
use crate::errors::BadwordsError;

/// Upper bound on the compiled program size of any single pattern.
const COMPILED_SIZE_LIMIT: usize = 10 * (1 << 20);

/// ASCII word boundary. Kept ASCII so that word characters mean `[A-Za-z0-9_]`
/// consistently across matcher, tokenizer and redactor.
pub const WORD_BOUNDARY: &str = r"(?-u:\b)";

/// Escapes every pattern metacharacter in `term` so it matches literally.
pub fn escape_term(term: &str) -> String {
    regex::escape(term)
}

/// Builds the source of the match pattern for a blacklist term.
///
/// The term must appear between two word boundaries, repeated one or more
/// times, so both `shit` and `shitshit` match while `shits` does not.
///
/// ASCII letters get explicit two-case classes instead of a global `(?i)`.
/// Unicode folding would let `ſ` match `s` and the Kelvin sign match `k`,
/// flagging text whose tokens the redactor never masks.
pub fn term_pattern_source(term: &str) -> String {
    let mut literal = String::with_capacity(term.len() * 4);
    let mut buf = [0u8; 4];
    for c in term.chars() {
        if c.is_ascii_alphabetic() {
            literal.push('[');
            literal.push(c.to_ascii_lowercase());
            literal.push(c.to_ascii_uppercase());
            literal.push(']');
        } else if c.is_ascii() {
            literal.push_str(&escape_term(c.encode_utf8(&mut buf)));
        } else {
            literal.push_str("(?i:");
            literal.push_str(&escape_term(c.encode_utf8(&mut buf)));
            literal.push(')');
        }
    }
    format!("{WORD_BOUNDARY}(?:{literal})+{WORD_BOUNDARY}")
}

/// Compiles the case-insensitive match pattern for a blacklist term.
pub fn compile_term_pattern(term: &str) -> Result<Regex, BadwordsError> {
    let source = term_pattern_source(term);
    RegexBuilder::new(&source)
        .size_limit(COMPILED_SIZE_LIMIT)
        .build()
        .map_err(|e| BadwordsError::PatternCompilation(term.to_string(), e))
}

/// Compiles a user-supplied option pattern such as `split_regex`.
///
/// `name` identifies the option in error messages.
pub fn compile_pattern(name: &str, pattern: &str) -> Result<Regex, BadwordsError> {
    if pattern.len() > MAX_PATTERN_LENGTH {
        return Err(BadwordsError::PatternLengthExceeded(
            name.to_string(),
            pattern.len(),
            MAX_PATTERN_LENGTH,
        ));
    }

    let regex = RegexBuilder::new(pattern)
        .size_limit(COMPILED_SIZE_LIMIT)
        .build()
        .map_err(|e| BadwordsError::PatternCompilation(name.to_string(), e))?;

    debug!(target: "badwords_core::compiler", "Pattern '{}' compiled successfully.", name);
    Ok(regex)
}
