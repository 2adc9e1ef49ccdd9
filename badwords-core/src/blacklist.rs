//! blacklist.rs - The blacklist and exclusion set owned by a filter.
//!
//! Terms are kept verbatim, in insertion order, next to their compiled match
//! pattern. Exclusions are stored lowercased. The only mutations are
//! [`BlacklistStore::add_terms`] and [`BlacklistStore::remove_terms`]; removing
//! a word never deletes it from the blacklist, it only excludes it.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use regex::Regex;

use crate::compiler::compile_term_pattern;
use crate::errors::BadwordsError;

/// A blacklisted word or phrase with its compiled match pattern.
#[derive(Debug, Clone)]
pub struct Term {
    text: String,
    pattern: Regex,
}

impl Term {
    pub fn new(text: impl Into<String>) -> Result<Self, BadwordsError> {
        let text = text.into();
        let pattern = compile_term_pattern(&text)?;
        Ok(Self { text, pattern })
    }

    /// The term exactly as it was added.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }
}

#[derive(Debug, Clone, Default)]
pub struct BlacklistStore {
    terms: Vec<Term>,
    exclude: Vec<String>,
}

impl BlacklistStore {
    /// Creates a store seeded with `terms` and an initial exclusion set.
    ///
    /// Seed exclusions are lowercased like any later [`remove_terms`](Self::remove_terms) call.
    pub fn with_terms<I, S, E, X>(terms: I, exclude: E) -> Result<Self, BadwordsError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        E: IntoIterator<Item = X>,
        X: AsRef<str>,
    {
        let terms = terms
            .into_iter()
            .map(Term::new)
            .collect::<Result<Vec<_>, _>>()?;
        let exclude = exclude
            .into_iter()
            .map(|word| word.as_ref().to_lowercase())
            .collect();
        Ok(Self { terms, exclude })
    }

    /// Appends terms verbatim and lifts any exclusion on them.
    ///
    /// Duplicates are kept. Every term is compiled before the store changes,
    /// so a failure leaves it untouched.
    pub fn add_terms<I, S>(&mut self, terms: I) -> Result<(), BadwordsError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let new_terms = terms
            .into_iter()
            .map(|term| Term::new(term.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        for term in &new_terms {
            let lowered = term.as_str().to_lowercase();
            if let Some(idx) = self.exclude.iter().position(|excluded| *excluded == lowered) {
                self.exclude.remove(idx);
            }
        }

        debug!("Adding {} term(s) to the blacklist.", new_terms.len());
        self.terms.extend(new_terms);
        Ok(())
    }

    /// Excludes terms from matching. The blacklist itself is not modified.
    pub fn remove_terms<I, S>(&mut self, terms: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let before = self.exclude.len();
        self.exclude
            .extend(terms.into_iter().map(|term| term.as_ref().to_lowercase()));
        debug!("Excluded {} term(s).", self.exclude.len() - before);
    }

    /// Whether `term` is suppressed, compared case-insensitively.
    pub fn is_excluded(&self, term: &str) -> bool {
        let lowered = term.to_lowercase();
        self.exclude.iter().any(|excluded| *excluded == lowered)
    }

    /// Terms that currently participate in matching, in insertion order.
    pub fn active_terms(&self) -> impl Iterator<Item = &Term> {
        self.terms.iter().filter(|term| !self.is_excluded(term.as_str()))
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn exclusions(&self) -> &[String] {
        &self.exclude
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(terms: &[&str]) -> BlacklistStore {
        BlacklistStore::with_terms(terms.iter().copied(), Vec::<&str>::new()).unwrap()
    }

    #[test]
    fn test_add_terms_keeps_duplicates_and_order() {
        let mut s = store(&["dog"]);
        s.add_terms(["Go", "dog"]).unwrap();
        let texts: Vec<&str> = s.terms().iter().map(Term::as_str).collect();
        assert_eq!(texts, vec!["dog", "Go", "dog"]);
    }

    #[test]
    fn test_remove_terms_only_excludes() {
        let mut s = store(&["Hells"]);
        s.remove_terms(["HELLS"]);
        assert_eq!(s.len(), 1);
        assert_eq!(s.exclusions(), &["hells".to_string()]);
        assert!(s.is_excluded("hells"));
        assert!(s.is_excluded("Hells"));
        assert_eq!(s.active_terms().count(), 0);
    }

    #[test]
    fn test_add_terms_lifts_exclusion_case_insensitively() {
        let mut s = store(&[]);
        s.remove_terms(["shit"]);
        s.add_terms(["SHIT"]).unwrap();
        assert!(!s.is_excluded("shit"));
        assert!(s.exclusions().is_empty());
    }

    #[test]
    fn test_add_terms_lifts_one_exclusion_entry_per_term() {
        let mut s = store(&[]);
        s.remove_terms(["dog", "dog"]);
        s.add_terms(["dog"]).unwrap();
        assert_eq!(s.exclusions(), &["dog".to_string()]);
    }

    #[test]
    fn test_seed_exclusions_are_lowercased() {
        let s = BlacklistStore::with_terms(["ass"], ["ASS"]).unwrap();
        assert_eq!(s.exclusions(), &["ass".to_string()]);
    }
}
