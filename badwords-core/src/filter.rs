// badwords-core/src/filter.rs
//! The `Filter`: the blacklist-driven implementation of [`CensorEngine`].
//!
//! License: MIT OR APACHE 2.0

use anyhow::{Context, Result};
use log::debug;

use crate::blacklist::BlacklistStore;
use crate::compiler::compile_pattern;
use crate::config::{load_default_words, FilterConfig};
use crate::engine::CensorEngine;
use crate::errors::BadwordsError;
use crate::matcher;
use crate::profanity_match::{log_flagged_token_debug, ProfanityMatch};
use crate::redactor::Redactor;
use crate::tokenizer::Tokenizer;

/// A profanity filter owning its blacklist, exclusion set and options.
///
/// Options are fixed at construction. The word lists change only through
/// [`add_words`](Self::add_words) and [`remove_words`](Self::remove_words),
/// which take `&mut self`. To share one filter between threads that also
/// mutate it, wrap it in a `RwLock`/`Mutex`, or give each owner its own filter.
#[derive(Debug, Clone)]
pub struct Filter {
    store: BlacklistStore,
    tokenizer: Tokenizer,
    redactor: Redactor,
}

impl Filter {
    /// Builds a filter from `config`.
    ///
    /// The bundled default list is copied in unless `empty_list` is set;
    /// `list` is appended after it.
    pub fn new(config: &FilterConfig) -> Result<Self> {
        let defaults: &[String] = if config.empty_list {
            &[]
        } else {
            load_default_words()?
        };

        let store = BlacklistStore::with_terms(
            defaults.iter().chain(config.list.iter()).cloned(),
            config.exclude.iter(),
        )
        .context("Failed to compile blacklist terms")?;

        let split = compile_pattern("split_regex", config.split_pattern())?;
        let sanitize = compile_pattern("regex", config.sanitize_pattern())?;
        let replace = compile_pattern("replace_regex", config.replace_pattern())?;

        debug!(
            "Filter ready with {} terms and {} exclusions.",
            store.len(),
            store.exclusions().len()
        );

        Ok(Self {
            store,
            tokenizer: Tokenizer::new(split),
            redactor: Redactor::new(sanitize, replace, config.placeholder()),
        })
    }

    /// A filter with the default list and default options.
    pub fn default_filter() -> Result<Self> {
        Self::new(&FilterConfig::default())
    }

    /// Adds words to the blacklist and lifts any exclusion on them.
    ///
    /// Words are escaped before compilation, so the only failure is a word
    /// whose pattern exceeds the compiled size limit
    /// ([`BadwordsError::PatternCompilation`]). On error nothing is added.
    pub fn add_words<I, S>(&mut self, words: I) -> Result<(), BadwordsError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.store.add_terms(words)
    }

    /// Whitelists words without deleting them from the blacklist.
    pub fn remove_words<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.store.remove_terms(words)
    }

    /// Masks `word` unconditionally.
    pub fn replace_word(&self, word: &str) -> String {
        self.redactor.redact(word)
    }

    pub fn blacklist(&self) -> &BlacklistStore {
        &self.store
    }
}

impl CensorEngine for Filter {
    fn is_profane(&self, text: &str) -> bool {
        matcher::is_profane(&self.store, text)
    }

    fn clean(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        let tokens = self.tokenizer.tokenize(text);
        let pieces: Vec<String> = tokens
            .tokens
            .iter()
            .map(|token| {
                if self.is_profane(token) {
                    self.redactor.redact(token)
                } else {
                    (*token).to_string()
                }
            })
            .collect();
        tokens.join(&pieces)
    }

    fn find_matches(&self, text: &str) -> Vec<ProfanityMatch> {
        let tokens = self.tokenizer.tokenize(text);
        let mut matches = Vec::new();
        for (token, start) in tokens.tokens.into_iter().zip(tokens.offsets) {
            let Some(term) = matcher::matching_term(&self.store, token) else {
                continue;
            };
            let sanitized = self.redactor.redact(token);
            log_flagged_token_debug("[badwords_core::filter]", term, token, &sanitized);
            matches.push(ProfanityMatch {
                term: term.to_string(),
                original_string: token.to_string(),
                sanitized_string: sanitized,
                start,
                end: start + token.len(),
            });
        }
        matches
    }
}
