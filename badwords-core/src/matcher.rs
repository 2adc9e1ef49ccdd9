//! matcher.rs - Word-boundary matching of blacklist terms against text.
//!
//! License: MIT OR APACHE 2.0

use crate::blacklist::BlacklistStore;

/// Returns the first non-excluded term whose pattern matches `candidate`.
///
/// The whole candidate is searched, so a term is found inside a sentence as
/// well as in a single token.
pub fn matching_term<'a>(store: &'a BlacklistStore, candidate: &str) -> Option<&'a str> {
    if candidate.is_empty() {
        return None;
    }
    store
        .active_terms()
        .find(|term| term.pattern().is_match(candidate))
        .map(|term| term.as_str())
}

/// Whether `candidate` contains any non-excluded blacklist term.
pub fn is_profane(store: &BlacklistStore, candidate: &str) -> bool {
    matching_term(store, candidate).is_some()
}
