//! redactor.rs - Masks a flagged token with the placeholder character.
//!
//! License: MIT OR APACHE 2.0

use regex::{NoExpand, Regex};

#[derive(Debug, Clone)]
pub struct Redactor {
    sanitize: Regex,
    replace: Regex,
    placeholder: char,
}

impl Redactor {
    pub fn new(sanitize: Regex, replace: Regex, placeholder: char) -> Self {
        Self {
            sanitize,
            replace,
            placeholder,
        }
    }

    /// Strips sanitize-pattern matches from `word`, then turns every
    /// replace-pattern match into one placeholder.
    pub fn redact(&self, word: &str) -> String {
        let stripped = self.sanitize.replace_all(word, "");
        let mut buf = [0u8; 4];
        let placeholder: &str = self.placeholder.encode_utf8(&mut buf);
        self.replace
            .replace_all(&stripped, NoExpand(placeholder))
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_REPLACE_PATTERN, DEFAULT_SANITIZE_PATTERN};

    fn redactor(placeholder: char) -> Redactor {
        Redactor::new(
            Regex::new(DEFAULT_SANITIZE_PATTERN).unwrap(),
            Regex::new(DEFAULT_REPLACE_PATTERN).unwrap(),
            placeholder,
        )
    }

    #[test]
    fn test_masks_word_characters() {
        assert_eq!(redactor('*').redact("ash0le"), "******");
        assert_eq!(redactor('x').redact("hells"), "xxxxx");
    }

    #[test]
    fn test_strips_punctuation_before_masking() {
        assert_eq!(redactor('*').redact("f.u.c.k!"), "****");
        assert_eq!(redactor('*').redact("can't"), "****");
        assert_eq!(redactor('*').redact("up^"), "**");
    }

    #[test]
    fn test_keeps_allowed_symbols() {
        assert_eq!(redactor('*').redact("a$$h@le|"), "*$$*@**|");
    }

    #[test]
    fn test_strips_non_ascii() {
        assert_eq!(redactor('*').redact("français"), "*******");
    }

    #[test]
    fn test_placeholder_is_literal() {
        assert_eq!(redactor('$').redact("damn"), "$$$$");
    }
}
