//! Sub-configuration structs with their defaults.

use crate::types::{Model, Platform};
use serde::{Deserialize, Serialize};

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GeneralConfig {
    /// Model used when a request does not name one
    pub default_model: Model,

    /// Platform used when a request does not name one
    pub default_platform: Platform,
}

/// HTTP proxy settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address the proxy listens on
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8787".to_string(),
        }
    }
}

/// Resource limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Transport timeout for a single provider call in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            request_timeout_ms: 60_000,
        }
    }
}

/// Demo image generator settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Artificial delay before a demo image URL is returned
    pub image_delay_ms: u64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            image_delay_ms: 1500,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: error, warn, info, debug, trace
    pub level: String,

    /// Log format: "pretty" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

/// Description provider configurations.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LlmConfig {
    /// Gemini configuration
    pub gemini: Option<GeminiConfig>,

    /// Groq configuration
    pub groq: Option<GroqConfig>,
}

/// Gemini configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeminiConfig {
    /// API base, without the `/models/...` suffix
    pub endpoint: String,

    /// API key (supports ${ENV_VAR} syntax)
    pub api_key: String,

    /// Model name
    pub model: String,

    pub temperature: f64,
    pub top_p: f64,
    pub top_k: u32,
    pub max_output_tokens: u32,

    /// Threshold applied to every safety category
    pub safety_threshold: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            api_key: "${GEMINI_API_KEY}".to_string(),
            model: "gemini-1.5-flash".to_string(),
            temperature: 0.4,
            top_p: 1.0,
            top_k: 32,
            max_output_tokens: 1024,
            safety_threshold: "BLOCK_MEDIUM_AND_ABOVE".to_string(),
        }
    }
}

/// Groq configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GroqConfig {
    /// OpenAI-compatible API base, without `/chat/completions`
    pub endpoint: String,

    /// API key (supports ${ENV_VAR} syntax)
    pub api_key: String,

    /// Model name (must accept image input)
    pub model: String,

    pub temperature: f64,
    pub max_tokens: u32,

    /// System message sent ahead of the user prompt
    pub system_prompt: String,
}

impl Default for GroqConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.groq.com/openai/v1".to_string(),
            api_key: "${GROQ_API_KEY}".to_string(),
            model: "meta-llama/llama-4-scout-17b-16e-instruct".to_string(),
            temperature: 0.4,
            max_tokens: 500,
            system_prompt: "You are a social media expert who creates optimized descriptions \
                            based on images. Analyze the image provided and generate relevant, \
                            engaging content."
                .to_string(),
        }
    }
}
