//! Error types for URAI caption generation.
//!
//! Errors are split by concern: configuration, provider calls, and the
//! caption session. Provider API errors display the provider's own message
//! so callers can surface it unchanged.

use crate::types::Model;
use thiserror::Error;

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Errors raised while generating a description through a provider.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The request never produced an HTTP response (DNS, connect, timeout).
    #[error("{provider} request failed: {message}")]
    Transport { provider: String, message: String },

    /// The provider answered with a non-2xx status.
    ///
    /// `message` is the provider's reported `error.message`, or a generic
    /// fallback when the body carried none.
    #[error("{message}")]
    Api {
        provider: String,
        status_code: u16,
        message: String,
    },

    /// The response body was not the JSON we expected.
    #[error("Failed to parse {provider} response: {message}")]
    Parse { provider: String, message: String },

    /// No API key could be resolved for the provider.
    #[error("{provider} API key not set. Set {env_var} env var.")]
    MissingApiKey {
        provider: String,
        env_var: &'static str,
    },

    /// The registry has no provider for the requested model.
    #[error("No description provider configured for model '{0}'")]
    NotConfigured(Model),
}

impl ProviderError {
    /// HTTP status reported by the provider, if the call got that far.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ProviderError::Api { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }
}

/// Errors from the caption session.
#[derive(Error, Debug)]
pub enum SessionError {
    /// A generation was requested before any image was loaded.
    #[error("Please upload an image first")]
    NoImage,

    /// The provider call for the current selection failed.
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

/// Returned when parsing a closed enumeration (platform, model) from text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown {kind}: '{value}'")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}
