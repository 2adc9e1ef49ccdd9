//! `badwords check`: reports whether the input is profane.

use anyhow::Result;
use log::info;
use std::io::Write;

use badwords_core::CensorEngine;

/// Writes `profane` or `clean` and returns whether the input was profane.
pub fn run_check<W: Write>(engine: &dyn CensorEngine, input: &str, out: &mut W) -> Result<bool> {
    let profane = engine.is_profane(input);
    info!("Check completed. Profane: {}", profane);
    writeln!(out, "{}", if profane { "profane" } else { "clean" })?;
    Ok(profane)
}

#[cfg(test)]
mod tests {
    use super::*;
    use badwords_core::Filter;

    #[test]
    fn test_run_check() {
        let filter = Filter::default_filter().unwrap();
        let mut out = Vec::new();
        assert!(run_check(&filter, "shit happens", &mut out).unwrap());
        assert!(!run_check(&filter, "hello there", &mut out).unwrap());
        assert_eq!(String::from_utf8(out).unwrap(), "profane\nclean\n");
    }
}
