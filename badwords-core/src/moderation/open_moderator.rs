// badwords-core/src/moderation/open_moderator.rs
use async_trait::async_trait;
use log::{debug, warn};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::Serialize;

use crate::config::ModerationConfig;
use crate::errors::BadwordsError;
use crate::moderation::{ImagePayload, ModerationResult, Moderator, ProfanityCheckConfig};

pub const DEFAULT_BASE_URL: &str = "https://www.openmoderator.com";
pub const API_KEY_ENV: &str = "OPEN_MODERATOR_API_KEY";
const API_KEY_HEADER: &str = "x-api-key";

#[derive(Serialize)]
struct TextRequest<'a> {
    prompt: &'a str,
    config: &'a ProfanityCheckConfig,
}

/// Client for the OpenModerator text and image endpoints.
#[derive(Debug, Clone)]
pub struct OpenModeratorClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl OpenModeratorClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Resolves the API key once: configuration first, then `OPEN_MODERATOR_API_KEY`.
    ///
    /// An explicitly configured key deliberately overrides the environment,
    /// so `--api-key` or a config file can replace a key exported in the shell.
    /// An empty key counts as unset.
    pub fn from_config(config: &ModerationConfig) -> Self {
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var(API_KEY_ENV).ok())
            .filter(|key| !key.is_empty());
        let client = Self::new(api_key);
        match &config.base_url {
            Some(url) => client.with_base_url(url.clone()),
            None => client,
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Uses a caller-configured HTTP client, e.g. one with timeouts.
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn api_key(&self) -> Result<&str, BadwordsError> {
        self.api_key.as_deref().ok_or_else(|| {
            warn!("No API key found. AI functions will not work. Set in .env or pass as param: {API_KEY_ENV}");
            BadwordsError::MissingApiKey
        })
    }

    async fn parse_response(response: Response) -> Result<ModerationResult, BadwordsError> {
        let status = response.status();
        if !status.is_success() {
            warn!("OpenModerator API returned HTTP {}", status);
            return Err(BadwordsError::HttpStatus(status.as_u16()));
        }
        Ok(response.json::<ModerationResult>().await?)
    }
}

#[async_trait]
impl Moderator for OpenModeratorClient {
    fn name(&self) -> &str {
        "openmoderator"
    }

    async fn moderate_text(
        &self,
        text: &str,
        config: &ProfanityCheckConfig,
    ) -> Result<ModerationResult, BadwordsError> {
        let api_key = self.api_key()?;
        let url = format!("{}/api/moderate/text", self.base_url);
        debug!("Sending {} bytes of text to {}", text.len(), url);

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, api_key)
            .json(&TextRequest {
                prompt: text,
                config,
            })
            .send()
            .await
            .inspect_err(|e| warn!("Error calling OpenModerator API: {e}"))?;

        Self::parse_response(response).await
    }

    async fn moderate_image(&self, image: ImagePayload) -> Result<ModerationResult, BadwordsError> {
        let api_key = self.api_key()?;
        let url = format!("{}/api/moderate/image", self.base_url);
        debug!("Sending image '{}' ({} bytes) to {}", image.file_name, image.bytes.len(), url);

        let mime = image.mime_type();
        let part = Part::bytes(image.bytes)
            .file_name(image.file_name)
            .mime_str(mime)?;
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, api_key)
            .multipart(form)
            .send()
            .await
            .inspect_err(|e| warn!("Error calling OpenModerator API: {e}"))?;

        Self::parse_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_key_wins_and_base_url_is_trimmed() {
        let client = OpenModeratorClient::from_config(&ModerationConfig {
            api_key: Some("from-config".to_string()),
            base_url: Some("http://localhost:1234/".to_string()),
        });
        assert!(client.has_api_key());
        assert_eq!(client.api_key().unwrap(), "from-config");
        assert_eq!(client.base_url(), "http://localhost:1234");
    }

    #[tokio::test]
    async fn test_missing_key_fails_before_network() {
        // Port 9 is never contacted: the key check comes first.
        let client = OpenModeratorClient::new(None).with_base_url("http://127.0.0.1:9");
        let err = client
            .moderate_text("hello", &ProfanityCheckConfig::default())
            .await
            .unwrap_err();
        assert!(matches!(err, BadwordsError::MissingApiKey));

        let err = client
            .moderate_image(ImagePayload::new(vec![1, 2, 3], "x.png"))
            .await
            .unwrap_err();
        assert!(matches!(err, BadwordsError::MissingApiKey));
    }
}
