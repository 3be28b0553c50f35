//! Groq description provider using the OpenAI-compatible Chat Completions API.
//!
//! A system message sets the social-media-expert role; the user message
//! carries the prompt and the image as a data URL content part.

use super::{
    read_envelope, text_or_fallback, transport_error, DescriptionProvider, DescriptionRequest,
};
use crate::config::GroqConfig;
use crate::error::ProviderError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Groq provider using Chat Completions with bearer auth.
pub struct GroqProvider {
    api_key: String,
    config: GroqConfig,
    client: reqwest::Client,
    timeout: Duration,
}

impl GroqProvider {
    pub fn new(api_key: &str, config: &GroqConfig) -> Self {
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
            "{}/chat/completions",
            self.config.endpoint.trim_end_matches('/')
        )
    }
}

// --- Request types ---

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
    max_tokens: u32,
}

#[derive(Serialize)]
#[serde(tag = "role", rename_all = "lowercase")]
enum ChatMessage<'a> {
    System { content: &'a str },
    User { content: Vec<ChatContent<'a>> },
}

#[derive(Serialize)]
#[serde(tag = "type")]
enum ChatContent<'a> {
    #[serde(rename = "text")]
    Text { text: String },
    #[serde(rename = "image_url")]
    ImageUrl { image_url: ImageUrl<'a> },
}

#[derive(Serialize)]
struct ImageUrl<'a> {
    url: &'a str,
}

// --- Response types ---

#[derive(Deserialize)]
struct ChatResponse {
    choices: Option<Vec<Choice>>,
}

#[derive(Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl ChatResponse {
    /// `choices[0].message.content`, if present.
    fn first_content(self) -> Option<String> {
        self.choices?.into_iter().next()?.message?.content
    }
}

#[async_trait]
impl DescriptionProvider for GroqProvider {
    fn name(&self) -> &str {
        "groq"
    }

    async fn generate(&self, request: &DescriptionRequest) -> Result<String, ProviderError> {
        let start = Instant::now();

        let body = ChatRequest {
            model: &self.config.model,
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
            messages: vec![
                ChatMessage::System {
                    content: &self.config.system_prompt,
                },
                ChatMessage::User {
                    content: vec![
                        ChatContent::Text {
                            text: request.prompt(),
                        },
                        ChatContent::ImageUrl {
                            image_url: ImageUrl {
                                url: request.image.data_url(),
                            },
                        },
                    ],
                },
            ],
        };

        let resp = self
            .client
            .post(self.url())
            .bearer_auth(&self.api_key)
            .json(&body)
            .timeout(self.timeout())
            .send()
            .await
            .map_err(|e| transport_error("groq", e))?;

        let envelope: ChatResponse =
            read_envelope("groq", resp, "Failed to generate description with Groq").await?;
        let text = text_or_fallback(envelope.first_content());

        tracing::debug!(
            provider = "groq",
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
