//! Provides data structures for reporting flagged tokens and the logging
//! helpers that keep flagged words out of debug logs by default.

use log::debug;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Whether flagged words may appear verbatim in debug logs.
static WORD_DEBUG_ALLOWED: Lazy<bool> = Lazy::new(|| {
    std::env::var("BADWORDS_ALLOW_DEBUG_WORDS")
        .map(|s| s.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
});

/// A single token flagged by the filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfanityMatch {
    /// The blacklist term that matched, as it was added.
    pub term: String,
    pub original_string: String,
    pub sanitized_string: String,
    /// Byte offsets of the token in the input.
    pub start: usize,
    pub end: usize,
}

/// Occurrences of one term across a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfanitySummaryItem {
    pub term: String,
    pub occurrences: usize,
    pub original_texts: Vec<String>,
}

/// Groups matches by term, ordered by first appearance.
pub fn summarize(matches: &[ProfanityMatch]) -> Vec<ProfanitySummaryItem> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut summary: Vec<ProfanitySummaryItem> = Vec::new();
    for m in matches {
        let slot = *index.entry(m.term.as_str()).or_insert_with(|| {
            summary.push(ProfanitySummaryItem {
                term: m.term.clone(),
                occurrences: 0,
                original_texts: Vec::new(),
            });
            summary.len() - 1
        });
        summary[slot].occurrences += 1;
        summary[slot].original_texts.push(m.original_string.clone());
    }
    summary
}

pub fn redact_sensitive(s: &str) -> String {
    const MAX_LEN: usize = 8;
    if s.len() <= MAX_LEN {
        "[REDACTED]".to_string()
    } else {
        format!("[REDACTED: {} chars]", s.len())
    }
}

fn get_loggable_content(word: &str) -> String {
    if *WORD_DEBUG_ALLOWED {
        word.to_string()
    } else {
        redact_sensitive(word)
    }
}

pub fn log_flagged_token_debug(module_path: &str, term: &str, token: &str, sanitized: &str) {
    debug!(
        "{} Flagged token: Term='{}', Original='{}', Sanitized='{}'",
        module_path,
        get_loggable_content(term),
        get_loggable_content(token),
        sanitized
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(term: &str, original: &str, start: usize) -> ProfanityMatch {
        ProfanityMatch {
            term: term.to_string(),
            original_string: original.to_string(),
            sanitized_string: "*".repeat(original.len()),
            start,
            end: start + original.len(),
        }
    }

    #[test]
    fn test_redact_sensitive_short_string() {
        assert_eq!(redact_sensitive("abc"), "[REDACTED]".to_string());
    }

    #[test]
    fn test_redact_sensitive_long_string() {
        assert_eq!(redact_sensitive("123456789"), "[REDACTED: 9 chars]".to_string());
    }

    #[test]
    fn test_summarize_groups_by_term_in_first_seen_order() {
        let matches = vec![m("shit", "shit", 0), m("fuck", "Fuck", 5), m("shit", "SHIT", 10)];
        let summary = summarize(&matches);
        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].term, "shit");
        assert_eq!(summary[0].occurrences, 2);
        assert_eq!(summary[0].original_texts, vec!["shit", "SHIT"]);
        assert_eq!(summary[1].term, "fuck");
        assert_eq!(summary[1].occurrences, 1);
    }
}
