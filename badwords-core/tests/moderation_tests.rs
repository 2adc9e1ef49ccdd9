// badwords-core/tests/moderation_tests.rs
//! Exercises the OpenModerator client against a local `mockito` server.

use mockito::Matcher;
use serde_json::json;

use badwords_core::{
    BadwordsError, ImagePayload, Moderator, OpenModeratorClient, ProfanityCheckConfig, Provider,
};

fn client_for(server: &mockito::Server) -> OpenModeratorClient {
    OpenModeratorClient::new(Some("secret-key".to_string())).with_base_url(server.url())
}

#[tokio::test]
async fn test_moderate_text_sends_prompt_and_key() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/moderate/text")
        .match_header("x-api-key", "secret-key")
        .match_body(Matcher::Json(json!({
            "prompt": "you are a jerk",
            "config": {
                "checkManualProfanityList": true,
                "provider": "openai"
            }
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"profane": true, "type": ["PROFANITY", "INSULT"]}"#)
        .create_async()
        .await;

    let config = ProfanityCheckConfig {
        check_manual_profanity_list: true,
        provider: Provider::OpenAi,
    };
    let result = client_for(&server)
        .moderate_text("you are a jerk", &config)
        .await
        .unwrap();

    assert!(result.flagged);
    assert_eq!(result.categories, vec!["PROFANITY", "INSULT"]);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_moderate_image_uploads_multipart_file() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/moderate/image")
        .match_header("x-api-key", "secret-key")
        .match_header("content-type", Matcher::Regex("multipart/form-data".to_string()))
        .match_body(Matcher::Regex(r#"name="file"; filename="cat.png""#.to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"nsfw": false, "types": []}"#)
        .create_async()
        .await;

    let image = ImagePayload::new(b"fake png bytes".to_vec(), "cat.png");
    let result = client_for(&server).moderate_image(image).await.unwrap();

    assert!(!result.flagged);
    assert!(result.categories.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_http_error_status_is_reported() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/api/moderate/image")
        .with_status(401)
        .create_async()
        .await;

    let image = ImagePayload::new(vec![0u8; 4], "x.jpg");
    let err = client_for(&server).moderate_image(image).await.unwrap_err();
    assert!(matches!(err, BadwordsError::HttpStatus(401)), "{err}");
}

#[tokio::test]
async fn test_malformed_body_is_a_transport_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/api/moderate/text")
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;

    let err = client_for(&server)
        .moderate_text("hello", &ProfanityCheckConfig::default())
        .await
        .unwrap_err();
    assert!(matches!(err, BadwordsError::Transport(_)), "{err}");
}

#[tokio::test]
async fn test_missing_key_never_reaches_server() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/moderate/text")
        .expect(0)
        .create_async()
        .await;

    let client = OpenModeratorClient::new(None).with_base_url(server.url());
    let err = client
        .moderate_text("hello", &ProfanityCheckConfig::default())
        .await
        .unwrap_err();
    assert!(matches!(err, BadwordsError::MissingApiKey));
    mock.assert_async().await;
}
