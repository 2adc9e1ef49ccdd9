//! `badwords clean`: prints the input with profane words masked.

use anyhow::{Context, Result};
use log::{debug, info};
use std::io::Write;

use badwords_core::{summarize, CensorEngine, ProfanitySummaryItem};

/// Options for [`run_clean`].
#[derive(Debug, Default)]
pub struct CleanOptions {
    pub input: String,
    pub stats: bool,
}

/// Cleans `opts.input`, writing the result to `out` and, with `stats`, a
/// per-word summary to `err`.
pub fn run_clean<W: Write, E: Write>(
    engine: &dyn CensorEngine,
    opts: &CleanOptions,
    out: &mut W,
    err: &mut E,
) -> Result<()> {
    info!("Starting clean operation.");

    let cleaned = engine.clean(&opts.input);
    debug!(
        "Content cleaned. Original length: {}, cleaned length: {}",
        opts.input.len(),
        cleaned.len()
    );

    out.write_all(cleaned.as_bytes())
        .context("Failed to write cleaned output")?;
    if !cleaned.ends_with('\n') {
        writeln!(out)?;
    }

    if opts.stats {
        let summary = summarize(&engine.find_matches(&opts.input));
        print_summary(&summary, err)?;
    }

    info!("Clean operation completed.");
    Ok(())
}

/// Writes one line per matched word, followed by a total.
pub fn print_summary<E: Write>(summary: &[ProfanitySummaryItem], err: &mut E) -> Result<()> {
    if summary.is_empty() {
        writeln!(err, "No profanity found.")?;
        return Ok(());
    }
    writeln!(err, "Profanity summary:")?;
    for item in summary {
        writeln!(err, "  {}: {}", item.term, item.occurrences)?;
    }
    let total: usize = summary.iter().map(|item| item.occurrences).sum();
    writeln!(err, "Total: {total}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use badwords_core::{Filter, FilterConfig};

    fn filter() -> Filter {
        Filter::new(&FilterConfig {
            empty_list: true,
            list: vec!["dog".to_string(), "go".to_string()],
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_run_clean_writes_output_and_stats() {
        let opts = CleanOptions {
            input: "Go dog go".to_string(),
            stats: true,
        };
        let (mut out, mut err) = (Vec::new(), Vec::new());
        run_clean(&filter(), &opts, &mut out, &mut err).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "** *** **\n");
        let err = String::from_utf8(err).unwrap();
        assert!(err.contains("go: 2"), "{err}");
        assert!(err.contains("dog: 1"), "{err}");
        assert!(err.contains("Total: 3"), "{err}");
    }

    #[test]
    fn test_run_clean_keeps_trailing_newline() {
        let opts = CleanOptions {
            input: "hello there\n".to_string(),
            stats: false,
        };
        let (mut out, mut err) = (Vec::new(), Vec::new());
        run_clean(&filter(), &opts, &mut out, &mut err).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "hello there\n");
        assert!(err.is_empty());
    }
}
