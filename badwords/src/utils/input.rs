//! Resolves the text a command operates on.

use anyhow::{bail, Context, Result};
use is_terminal::IsTerminal;
use log::debug;
use std::fs;
use std::io::{self, Read};

use crate::cli::InputArgs;

/// Returns the positional text, the contents of `--input-file`, or stdin, in
/// that order of preference.
pub fn read_input(args: &InputArgs) -> Result<String> {
    if let Some(text) = &args.text {
        debug!("Using {} bytes of text from the command line.", text.len());
        return Ok(text.clone());
    }

    if let Some(path) = &args.input_file {
        debug!("Reading input from file: {}", path.display());
        return fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display()));
    }

    let mut stdin = io::stdin();
    if stdin.is_terminal() {
        bail!("No input provided. Pass TEXT, use --input-file, or pipe text on stdin.");
    }
    let mut buffer = String::new();
    stdin
        .read_to_string(&mut buffer)
        .context("Failed to read from stdin")?;
    debug!("Read {} bytes from stdin.", buffer.len());
    Ok(buffer)
}
