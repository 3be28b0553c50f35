//! Configuration validation with range checks.

use crate::error::ConfigError;
use std::net::SocketAddr;

use super::Config;

impl Config {
    /// Validate configuration values are within acceptable ranges.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.limits.request_timeout_ms == 0 {
            return Err(ConfigError::ValidationError(
                "limits.request_timeout_ms must be > 0".into(),
            ));
        }
        if self.server.bind.parse::<SocketAddr>().is_err() {
            return Err(ConfigError::ValidationError(format!(
                "server.bind must be a socket address like 127.0.0.1:8787, got '{}'",
                self.server.bind
            )));
        }
        if let Some(gemini) = &self.llm.gemini {
            check_temperature("llm.gemini.temperature", gemini.temperature)?;
            if !(0.0..=1.0).contains(&gemini.top_p) {
                return Err(ConfigError::ValidationError(
                    "llm.gemini.top_p must be between 0.0 and 1.0".into(),
                ));
            }
            if gemini.max_output_tokens == 0 {
                return Err(ConfigError::ValidationError(
                    "llm.gemini.max_output_tokens must be > 0".into(),
                ));
            }
        }
        if let Some(groq) = &self.llm.groq {
            check_temperature("llm.groq.temperature", groq.temperature)?;
            if groq.max_tokens == 0 {
                return Err(ConfigError::ValidationError(
                    "llm.groq.max_tokens must be > 0".into(),
                ));
            }
        }
        Ok(())
    }
}

fn check_temperature(field: &str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=2.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(format!(
            "{field} must be between 0.0 and 2.0"
        )))
    }
}
