// badwords-core/src/headless.rs

//! `headless.rs`
//! Convenience wrappers for one-shot, non-interactive use of the filter.

use anyhow::Result;

use crate::config::FilterConfig;
use crate::engine::CensorEngine;
use crate::filter::Filter;

/// Builds a filter from `config` and cleans `content` with it.
pub fn headless_clean_string(config: &FilterConfig, content: &str) -> Result<String> {
    let filter = Filter::new(config)?;
    Ok(filter.clean(content))
}

/// Builds a filter from `config` and reports whether `content` is profane.
pub fn headless_is_profane(config: &FilterConfig, content: &str) -> Result<bool> {
    let filter = Filter::new(config)?;
    Ok(filter.is_profane(content))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headless_clean_string() -> Result<()> {
        let config = FilterConfig {
            empty_list: true,
            list: vec!["dog".to_string()],
            placeholder: Some('#'),
            ..Default::default()
        };
        let cleaned = headless_clean_string(&config, "Go dog go")?;
        assert_eq!(cleaned, "Go ### go");
        Ok(())
    }

    #[test]
    fn test_headless_is_profane_with_defaults() -> Result<()> {
        let config = FilterConfig::default();
        assert!(headless_is_profane(&config, "that person is an ash0le")?);
        assert!(!headless_is_profane(&config, "hello there")?);
        Ok(())
    }
}
