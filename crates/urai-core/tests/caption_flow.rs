//! End-to-end caption flow against mocked provider HTTP APIs.

use serde_json::json;
use std::sync::Arc;
use urai_core::config::{GeminiConfig, GroqConfig};
use urai_core::provider::{GeminiProvider, GroqProvider};
use urai_core::{
    CaptionSession, DescriptionState, ImagePayload, Model, Outcome, Platform, ProviderRegistry,
    GENERIC_FAILURE_NOTICE,
};
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn gemini_reply(text: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "candidates": [{ "content": { "parts": [{ "text": text }] } }]
    }))
}

fn session_against(server: &MockServer) -> CaptionSession {
    let gemini = GeminiConfig {
        endpoint: server.uri(),
        ..Default::default()
    };
    let groq = GroqConfig {
        endpoint: format!("{}/openai/v1", server.uri()),
        ..Default::default()
    };

    let mut registry = ProviderRegistry::new();
    registry.register(Model::Gemini, Arc::new(GeminiProvider::new("g-key", &gemini)));
    registry.register(Model::Groq, Arc::new(GroqProvider::new("q-key", &groq)));
    CaptionSession::new(Arc::new(registry), Platform::Twitter, Model::Gemini)
}

#[tokio::test]
async fn upload_then_platform_switch_replaces_description() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/gemini-1.5-flash:generateContent"))
        .and(body_string_contains("Twitter post description"))
        .respond_with(gemini_reply("Hello #world"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/models/gemini-1.5-flash:generateContent"))
        .and(body_string_contains("Threads post"))
        .respond_with(gemini_reply("What do you all think? #sunset"))
        .expect(1)
        .mount(&server)
        .await;

    let session = session_against(&server);

    let outcome = session
        .load_image(ImagePayload::from_data_url("data:image/jpeg;base64,AAAA"))
        .await
        .unwrap();
    assert_eq!(outcome, Outcome::Current("Hello #world".to_string()));
    assert_eq!(
        session.description().await,
        DescriptionState::Ready("Hello #world".to_string())
    );

    session.set_platform(Platform::Threads).await.unwrap();
    assert_eq!(
        session.description().await,
        DescriptionState::Ready("What do you all think? #sunset".to_string())
    );
}

#[tokio::test]
async fn selector_changes_without_image_hit_no_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(gemini_reply("unexpected"))
        .expect(0)
        .mount(&server)
        .await;

    let session = session_against(&server);
    assert_eq!(
        session.set_platform(Platform::Snapchat).await.unwrap(),
        Outcome::Skipped
    );
    assert_eq!(session.set_model(Model::Groq).await.unwrap(), Outcome::Skipped);
    assert_eq!(session.description().await, DescriptionState::Empty);
}

#[tokio::test]
async fn model_switch_routes_to_groq_and_failure_clears_description() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/gemini-1.5-flash:generateContent"))
        .respond_with(gemini_reply("Gemini says hi"))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/openai/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "error": { "message": "Rate limit reached" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let session = session_against(&server);
    session
        .load_image(ImagePayload::from_data_url("data:image/png;base64,iVBORw=="))
        .await
        .unwrap();

    let err = session.set_model(Model::Groq).await.unwrap_err();
    assert_eq!(err.to_string(), "Rate limit reached");
    assert_eq!(
        session.description().await,
        DescriptionState::Failed(GENERIC_FAILURE_NOTICE.to_string())
    );
}
