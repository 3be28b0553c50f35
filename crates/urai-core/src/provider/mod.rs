//! Description providers.
//!
//! Each hosted backend implements [`DescriptionProvider`]; they differ only
//! in endpoint, auth scheme and response envelope. A [`ProviderRegistry`]
//! maps each [`Model`](crate::types::Model) to its implementation.

pub(crate) mod gemini;
pub(crate) mod groq;
pub(crate) mod registry;

pub use gemini::GeminiProvider;
pub use groq::GroqProvider;
pub use registry::{resolve_env_var, ProviderFactory, ProviderRegistry};

use crate::error::ProviderError;
use crate::image::ImagePayload;
use crate::prompt;
use crate::types::Platform;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Returned when a provider answers 2xx without any usable text.
pub const FALLBACK_DESCRIPTION: &str = "Could not generate a description for this image.";

/// A request to describe one image for one platform.
#[derive(Debug, Clone)]
pub struct DescriptionRequest {
    pub image: ImagePayload,
    pub platform: Platform,
    pub custom_prompt: Option<String>,
}

impl DescriptionRequest {
    pub fn new(image: ImagePayload, platform: Platform) -> Self {
        Self {
            image,
            platform,
            custom_prompt: None,
        }
    }

    pub fn with_custom_prompt(mut self, custom_prompt: Option<String>) -> Self {
        self.custom_prompt = custom_prompt;
        self
    }

    /// Platform instruction plus any custom context.
    pub fn prompt(&self) -> String {
        prompt::build_prompt(self.platform, self.custom_prompt.as_deref())
    }
}

/// Trait that all description backends implement.
///
/// Uses `async_trait` because native async fn in trait is not object-safe
/// (the registry hands out `Arc<dyn DescriptionProvider>`).
#[async_trait]
pub trait DescriptionProvider: Send + Sync {
    /// Provider name for logging (e.g., "gemini", "groq").
    fn name(&self) -> &str;

    /// Generate a description. Issues exactly one HTTP request, no retries.
    async fn generate(&self, request: &DescriptionRequest) -> Result<String, ProviderError>;

    /// Transport timeout for this provider.
    fn timeout(&self) -> Duration;
}

/// Decode a provider response body.
///
/// The body is parsed as JSON whatever the status. A non-2xx status becomes
/// [`ProviderError::Api`] carrying `error.message` from the body, or
/// `fallback_message` when there is none.
pub(crate) async fn read_envelope<T: DeserializeOwned>(
    provider: &str,
    resp: reqwest::Response,
    fallback_message: &str,
) -> Result<T, ProviderError> {
    let status = resp.status();
    let bytes = resp.bytes().await.map_err(|e| ProviderError::Transport {
        provider: provider.to_string(),
        message: format!("failed to read response body: {e}"),
    })?;

    let value: serde_json::Value =
        serde_json::from_slice(&bytes).map_err(|e| ProviderError::Parse {
            provider: provider.to_string(),
            message: e.to_string(),
        })?;

    if !status.is_success() {
        let message = value
            .get("error")
            .and_then(|err| err.get("message"))
            .and_then(|msg| msg.as_str())
            .filter(|msg| !msg.is_empty())
            .unwrap_or(fallback_message);
        return Err(ProviderError::Api {
            provider: provider.to_string(),
            status_code: status.as_u16(),
            message: message.to_string(),
        });
    }

    serde_json::from_value(value).map_err(|e| ProviderError::Parse {
        provider: provider.to_string(),
        message: e.to_string(),
    })
}

/// Use the extracted text as-is, or the sentinel when it is missing or blank.
pub(crate) fn text_or_fallback(text: Option<String>) -> String {
    text.filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| FALLBACK_DESCRIPTION.to_string())
}

pub(crate) fn transport_error(provider: &str, error: reqwest::Error) -> ProviderError {
    ProviderError::Transport {
        provider: provider.to_string(),
        message: error.to_string(),
    }
}
