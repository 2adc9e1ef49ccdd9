//! `badwords moderate`: forwards text or an image to the moderation API.

use anyhow::{Context, Result};
use log::info;
use std::io::Write;
use std::path::Path;

use badwords_core::{ImagePayload, ModerationResult, Moderator, ProfanityCheckConfig};

/// What to send for classification.
#[derive(Debug)]
pub enum ModerationInput<'a> {
    Text(&'a str),
    Image(&'a Path),
}

/// Sends `input` through `moderator` and prints the result as JSON.
pub async fn run_moderate<W: Write>(
    moderator: &dyn Moderator,
    input: ModerationInput<'_>,
    check_config: &ProfanityCheckConfig,
    out: &mut W,
) -> Result<ModerationResult> {
    let result = match input {
        ModerationInput::Text(text) => {
            info!("Moderating {} bytes of text with {}.", text.len(), moderator.name());
            moderator.moderate_text(text, check_config).await?
        }
        ModerationInput::Image(path) => {
            info!("Moderating image {} with {}.", path.display(), moderator.name());
            let bytes = tokio::fs::read(path)
                .await
                .with_context(|| format!("Failed to read image file: {}", path.display()))?;
            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| "image".to_string());
            moderator.moderate_image(ImagePayload::new(bytes, file_name)).await?
        }
    };

    writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?;
    Ok(result)
}
