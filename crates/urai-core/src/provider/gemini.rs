//! Gemini description provider using the generateContent API.
//!
//! Sends the prompt and the image as inline base64 data in a single content
//! entry. The API key travels as the `key` query parameter.

use super::{
    read_envelope, text_or_fallback, transport_error, DescriptionProvider, DescriptionRequest,
};
use crate::config::GeminiConfig;
use crate::error::ProviderError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

const SAFETY_CATEGORIES: [&str; 4] = [
    "HARM_CATEGORY_HARASSMENT",
    "HARM_CATEGORY_HATE_SPEECH",
    "HARM_CATEGORY_SEXUALLY_EXPLICIT",
    "HARM_CATEGORY_DANGEROUS_CONTENT",
];

/// Gemini provider using the generateContent API.
pub struct GeminiProvider {
    api_key: String,
    config: GeminiConfig,
    client: reqwest::Client,
    timeout: Duration,
}

impl GeminiProvider {
    pub fn new(api_key: &str, config: &GeminiConfig) -> Self {
        Self {
            api_key: api_key.to_string(),
            config: config.clone(),
            client: reqwest::Client::new(),
            timeout: Duration::from_secs(60),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.endpoint.trim_end_matches('/'),
            self.config.model
        )
    }
}

// --- Request types ---

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
    safety_settings: Vec<SafetySetting<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Part<'a> {
    Text { text: String },
    InlineData { inline_data: InlineData<'a> },
}

#[derive(Serialize)]
struct InlineData<'a> {
    mime_type: &'a str,
    data: &'a str,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f64,
    top_p: f64,
    top_k: u32,
    max_output_tokens: u32,
}

#[derive(Serialize)]
struct SafetySetting<'a> {
    category: &'a str,
    threshold: &'a str,
}

// --- Response types ---

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    parts: Option<Vec<ResponsePart>>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// `candidates[0].content.parts[0].text`, if present.
    fn first_text(self) -> Option<String> {
        self.candidates?
            .into_iter()
            .next()?
            .content?
            .parts?
            .into_iter()
            .next()?
            .text
    }
}

#[async_trait]
impl DescriptionProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate(&self, request: &DescriptionRequest) -> Result<String, ProviderError> {
        let start = Instant::now();

        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![
                    Part::Text {
                        text: request.prompt(),
                    },
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: request.image.mime_type(),
                            data: request.image.base64_data(),
                        },
                    },
                ],
            }],
            generation_config: GenerationConfig {
                temperature: self.config.temperature,
                top_p: self.config.top_p,
                top_k: self.config.top_k,
                max_output_tokens: self.config.max_output_tokens,
            },
            safety_settings: SAFETY_CATEGORIES
                .into_iter()
                .map(|category| SafetySetting {
                    category,
                    threshold: &self.config.safety_threshold,
                })
                .collect(),
        };

        let resp = self
            .client
            .post(self.url())
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .timeout(self.timeout())
            .send()
            .await
            .map_err(|e| transport_error("gemini", e))?;

        let envelope: GenerateContentResponse =
            read_envelope("gemini", resp, "Failed to generate description").await?;
        let text = text_or_fallback(envelope.first_text());

        tracing::debug!(
            provider = "gemini",
            model = %self.config.model,
            platform = %request.platform,
            latency_ms = start.elapsed().as_millis() as u64,
            "Description generated"
        );

        Ok(text)
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::ImagePayload;
    use crate::provider::FALLBACK_DESCRIPTION;
    use crate::types::Platform;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const GENERATE_PATH: &str = "/models/gemini-1.5-flash:generateContent";

    fn provider_for(server: &MockServer) -> GeminiProvider {
        let config = GeminiConfig {
            endpoint: server.uri(),
            ..Default::default()
        };
        GeminiProvider::new("test-key", &config)
    }

    fn request() -> DescriptionRequest {
        DescriptionRequest::new(
            ImagePayload::from_data_url("data:image/png;base64,AAAA"),
            Platform::Twitter,
        )
    }

    #[tokio::test]
    async fn test_generate_returns_first_candidate_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .and(query_param("key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{ "content": { "parts": [{ "text": "X" }] } }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let text = provider_for(&server).generate(&request()).await.unwrap();
        assert_eq!(text, "X");
    }

    #[tokio::test]
    async fn test_generate_sends_prompt_image_and_settings() {
        let server = MockServer::start().await;
        let expected_prompt = crate::prompt::build_prompt(Platform::Twitter, Some("launch day"));
        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .and(body_partial_json(json!({
                "contents": [{
                    "parts": [
                        { "text": expected_prompt },
                        { "inline_data": { "mime_type": "image/png", "data": "AAAA" } }
                    ]
                }],
                "generation_config": { "top_k": 32, "max_output_tokens": 1024 },
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{ "content": { "parts": [{ "text": "ok" }] } }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let request = request().with_custom_prompt(Some("launch day".to_string()));
        let text = provider_for(&server).generate(&request).await.unwrap();
        assert_eq!(text, "ok");

        let received = server.received_requests().await.unwrap();
        let body: serde_json::Value = received[0].body_json().unwrap();
        let safety = body["safety_settings"].as_array().unwrap();
        assert_eq!(safety.len(), 4);
        assert!(safety
            .iter()
            .all(|s| s["threshold"] == "BLOCK_MEDIUM_AND_ABOVE"));
    }

    #[tokio::test]
    async fn test_error_status_carries_provider_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": { "code": 400, "message": "bad key" }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let err = provider_for(&server).generate(&request()).await.unwrap_err();
        assert_eq!(err.to_string(), "bad key");
        assert_eq!(err.status_code(), Some(400));
    }

    #[tokio::test]
    async fn test_error_status_without_message_uses_generic_fallback() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({})))
            .mount(&server)
            .await;

        let err = provider_for(&server).generate(&request()).await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to generate description");
    }

    #[tokio::test]
    async fn test_missing_text_path_returns_sentinel() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{ "finishReason": "SAFETY" }]
            })))
            .mount(&server)
            .await;

        let text = provider_for(&server).generate(&request()).await.unwrap();
        assert_eq!(text, FALLBACK_DESCRIPTION);
    }

    #[tokio::test]
    async fn test_text_keeps_surrounding_newlines() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{ "content": { "parts": [{ "text": "\nHello #world\n\n" }] } }]
            })))
            .mount(&server)
            .await;

        let text = provider_for(&server).generate(&request()).await.unwrap();
        assert_eq!(text, "\nHello #world\n\n");
    }

    #[tokio::test]
    async fn test_empty_text_returns_sentinel() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{ "content": { "parts": [{ "text": "" }] } }]
            })))
            .mount(&server)
            .await;

        let text = provider_for(&server).generate(&request()).await.unwrap();
        assert_eq!(text, FALLBACK_DESCRIPTION);
    }

    #[tokio::test]
    async fn test_unparseable_body_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = provider_for(&server).generate(&request()).await.unwrap_err();
        assert!(matches!(err, ProviderError::Parse { .. }));
    }

    #[tokio::test]
    async fn test_connection_failure_is_transport_error() {
        let config = GeminiConfig {
            endpoint: "http://127.0.0.1:1".to_string(),
            ..Default::default()
        };
        let provider = GeminiProvider::new("test-key", &config);
        let err = provider.generate(&request()).await.unwrap_err();
        assert!(matches!(err, ProviderError::Transport { .. }));
    }
}
