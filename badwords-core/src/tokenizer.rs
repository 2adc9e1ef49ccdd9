//! tokenizer.rs - Splits input into the tokens tested by the matcher.
//!
//! License: MIT OR APACHE 2.0

use regex::Regex;

/// Tokens of an input string plus the separator used to join them back.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tokens<'t> {
    pub tokens: Vec<&'t str>,
    /// Byte offset of each token in the input.
    pub offsets: Vec<usize>,
    /// Text of the first separator match, or `""` when the split rule never matched.
    pub delimiter: &'t str,
}

impl Tokens<'_> {
    /// Joins `pieces` with the captured delimiter.
    pub fn join<S: AsRef<str>>(&self, pieces: &[S]) -> String {
        let mut out = String::new();
        for (i, piece) in pieces.iter().enumerate() {
            if i > 0 {
                out.push_str(self.delimiter);
            }
            out.push_str(piece.as_ref());
        }
        out
    }
}

#[derive(Debug, Clone)]
pub struct Tokenizer {
    split: Regex,
}

impl Tokenizer {
    pub fn new(split: Regex) -> Self {
        Self { split }
    }

    /// Splits `text` on the split rule.
    ///
    /// A separator match is ignored when it is empty and ends where the
    /// previous token ended, or when it starts at the end of the input. With a
    /// zero-width rule like the default word boundary this yields no empty
    /// leading or trailing tokens, and joining with `""` restores the input.
    pub fn tokenize<'t>(&self, text: &'t str) -> Tokens<'t> {
        if text.is_empty() {
            return Tokens::default();
        }

        let mut tokens = Vec::new();
        let mut offsets = Vec::new();
        let mut last_end = 0;
        for m in self.split.find_iter(text) {
            if m.start() >= text.len() || (m.is_empty() && m.end() == last_end) {
                continue;
            }
            tokens.push(&text[last_end..m.start()]);
            offsets.push(last_end);
            last_end = m.end();
        }
        tokens.push(&text[last_end..]);
        offsets.push(last_end);

        let delimiter = self.split.find(text).map_or("", |m| m.as_str());
        Tokens {
            tokens,
            offsets,
            delimiter,
        }
    }
}
