//! Configuration management for URAI.
//!
//! Configuration is loaded from the platform config directory with sensible
//! defaults. API keys are never stored literally by default; they point at
//! environment variables via `${VAR}` references.

mod types;
mod validate;

pub use types::*;

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Root configuration structure for URAI.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,

    /// HTTP proxy settings
    pub server: ServerConfig,

    /// Resource limits
    pub limits: LimitsConfig,

    /// Demo image generator settings
    pub demo: DemoConfig,

    /// Logging settings
    pub logging: LoggingConfig,

    /// Description provider settings
    pub llm: LlmConfig,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Returns default configuration if the file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default config file path.
    ///
    /// Uses platform-appropriate directories:
    /// - macOS: ~/Library/Application Support/com.urai.urai/config.toml
    /// - Linux: ~/.config/urai/config.toml
    /// - Windows: C:\Users\<User>\AppData\Roaming\urai\config\config.toml
    ///
    /// Falls back to ~/.urai/config.toml if directory detection fails.
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("com", "urai", "urai")
            .map(|dirs| dirs.config_dir().to_path_buf().join("config.toml"))
            .unwrap_or_else(|| {
                let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
                PathBuf::from(home).join(".urai").join("config.toml")
            })
    }

    /// Transport timeout for provider calls.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.limits.request_timeout_ms)
    }

    /// Serialize the config to a pretty TOML string.
    ///
    /// Provider sections are materialized with defaults so `config init`
    /// writes a file that shows every knob.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        let mut full = self.clone();
        full.llm.gemini.get_or_insert_with(Default::default);
        full.llm.groq.get_or_insert_with(Default::default);
        toml::to_string_pretty(&full).map_err(|e| ConfigError::ValidationError(e.to_string()))
    }
}
