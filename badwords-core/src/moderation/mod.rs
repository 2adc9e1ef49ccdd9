// badwords-core/src/moderation/mod.rs
//! Remote AI moderation, kept apart from the word-list filter.
//!
//! A [`Moderator`] classifies text or an image through an external service.
//! These are the only network-bound operations in the crate. Timeouts and
//! cancellation are left to the caller (supply a configured `reqwest::Client`
//! or wrap the future in `tokio::time::timeout`).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::BadwordsError;

pub mod open_moderator;

pub use open_moderator::OpenModeratorClient;

/// Backend the moderation service should consult for text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Provider {
    /// OpenAI's Moderation API.
    #[serde(rename = "openai")]
    OpenAi,
    /// Google's Perspective API.
    #[default]
    #[serde(rename = "google-perspective-api")]
    GooglePerspectiveApi,
    /// Google's Natural Language API.
    #[serde(rename = "google-natural-language-api")]
    GoogleNaturalLanguageApi,
}

/// Per-request options for text moderation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfanityCheckConfig {
    /// Ask the service to check its manual profanity list before the provider.
    pub check_manual_profanity_list: bool,
    pub provider: Provider,
}

/// Classification returned by a moderator.
///
/// Text responses arrive as `{ "profane", "type" }` and image responses as
/// `{ "nsfw", "types" }`; both land here.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ModerationResult {
    #[serde(alias = "profane", alias = "nsfw")]
    pub flagged: bool,
    #[serde(default, alias = "type", alias = "types")]
    pub categories: Vec<String>,
}

/// An image to classify.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    pub bytes: Vec<u8>,
    pub file_name: String,
}

impl ImagePayload {
    pub fn new(bytes: Vec<u8>, file_name: impl Into<String>) -> Self {
        Self {
            bytes,
            file_name: file_name.into(),
        }
    }

    /// MIME type guessed from the file extension.
    pub fn mime_type(&self) -> &'static str {
        let ext = self
            .file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "jpg" | "jpeg" => "image/jpeg",
            "png" => "image/png",
            "gif" => "image/gif",
            "webp" => "image/webp",
            _ => "application/octet-stream",
        }
    }
}

#[async_trait]
pub trait Moderator: Send + Sync {
    fn name(&self) -> &str;

    /// Classifies `text` for profanity and related categories.
    async fn moderate_text(
        &self,
        text: &str,
        config: &ProfanityCheckConfig,
    ) -> Result<ModerationResult, BadwordsError>;

    /// Classifies an image for NSFW content.
    async fn moderate_image(&self, image: ImagePayload) -> Result<ModerationResult, BadwordsError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_config_wire_format() {
        let json = serde_json::to_value(ProfanityCheckConfig::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "checkManualProfanityList": false,
                "provider": "google-perspective-api"
            })
        );
        let openai = ProfanityCheckConfig {
            check_manual_profanity_list: true,
            provider: Provider::OpenAi,
        };
        assert_eq!(serde_json::to_value(openai).unwrap()["provider"], "openai");
    }

    #[test]
    fn test_result_accepts_text_and_image_shapes() {
        let text: ModerationResult =
            serde_json::from_str(r#"{"profane": true, "type": ["PROFANITY"]}"#).unwrap();
        assert!(text.flagged);
        assert_eq!(text.categories, vec!["PROFANITY"]);

        let image: ModerationResult =
            serde_json::from_str(r#"{"nsfw": false, "types": []}"#).unwrap();
        assert!(!image.flagged);
        assert!(image.categories.is_empty());
    }

    #[test]
    fn test_mime_type_from_extension() {
        assert_eq!(ImagePayload::new(vec![], "a.JPG").mime_type(), "image/jpeg");
        assert_eq!(ImagePayload::new(vec![], "b.png").mime_type(), "image/png");
        assert_eq!(ImagePayload::new(vec![], "blob").mime_type(), "application/octet-stream");
    }
}
