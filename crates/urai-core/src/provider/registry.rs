//! Provider construction and model-to-provider lookup.

use super::{DescriptionProvider, GeminiProvider, GroqProvider};
use crate::config::{Config, LlmConfig};
use crate::error::ProviderError;
use crate::types::Model;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

/// Resolve `${ENV_VAR}` references in config strings.
pub fn resolve_env_var(value: &str) -> Option<String> {
    if value.starts_with("${") && value.ends_with('}') {
        let var_name = &value[2..value.len() - 1];
        std::env::var(var_name).ok().filter(|v| !v.is_empty())
    } else if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Factory that creates a provider for a model from config.
pub struct ProviderFactory;

impl ProviderFactory {
    /// Create the provider for `model`.
    ///
    /// # Arguments
    /// * `model` - Which backend to build
    /// * `config` - The full LLM config section
    /// * `model_override` - Optional backend model name that overrides the config default
    /// * `timeout` - Transport timeout for each call
    pub fn create(
        model: Model,
        config: &LlmConfig,
        model_override: Option<&str>,
        timeout: Duration,
    ) -> Result<Arc<dyn DescriptionProvider>, ProviderError> {
        match model {
            Model::Gemini => {
                let mut cfg = config.gemini.clone().unwrap_or_default();
                let api_key =
                    resolve_env_var(&cfg.api_key).ok_or_else(|| ProviderError::MissingApiKey {
                        provider: "Gemini".to_string(),
                        env_var: "GEMINI_API_KEY",
                    })?;
                if let Some(name) = model_override {
                    cfg.model = name.to_string();
                }
                Ok(Arc::new(
                    GeminiProvider::new(&api_key, &cfg).with_timeout(timeout),
                ))
            }
            Model::Groq => {
                let mut cfg = config.groq.clone().unwrap_or_default();
                let api_key =
                    resolve_env_var(&cfg.api_key).ok_or_else(|| ProviderError::MissingApiKey {
                        provider: "Groq".to_string(),
                        env_var: "GROQ_API_KEY",
                    })?;
                if let Some(name) = model_override {
                    cfg.model = name.to_string();
                }
                Ok(Arc::new(
                    GroqProvider::new(&api_key, &cfg).with_timeout(timeout),
                ))
            }
        }
    }
}

/// Maps each [`Model`] to the provider that serves it.
#[derive(Default, Clone)]
pub struct ProviderRegistry {
    providers: HashMap<Model, Arc<dyn DescriptionProvider>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register every provider whose API key resolves.
    ///
    /// Each provider uses the backend model from its own `[llm.*]` section.
    /// Providers without a key are skipped with a log line; asking for them
    /// later yields [`ProviderError::NotConfigured`].
    pub fn from_config(config: &Config) -> Self {
        let mut registry = Self::new();
        for model in Model::ALL {
            match ProviderFactory::create(model, &config.llm, None, config.request_timeout()) {
                Ok(provider) => registry.register(model, provider),
                Err(e) => tracing::debug!("Skipping {model} provider: {e}"),
            }
        }
        registry
    }

    /// Register (or replace) the provider for a model.
    pub fn register(&mut self, model: Model, provider: Arc<dyn DescriptionProvider>) {
        self.providers.insert(model, provider);
    }

    pub fn get(&self, model: Model) -> Result<Arc<dyn DescriptionProvider>, ProviderError> {
        self.providers
            .get(&model)
            .cloned()
            .ok_or(ProviderError::NotConfigured(model))
    }

    /// Models with a registered provider, in declaration order.
    pub fn models(&self) -> Vec<Model> {
        Model::ALL
            .into_iter()
            .filter(|m| self.providers.contains_key(m))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GeminiConfig, GroqConfig};

    fn config_with_keys(gemini: &str, groq: &str) -> Config {
        let mut config = Config::default();
        config.llm.gemini = Some(GeminiConfig {
            api_key: gemini.to_string(),
            ..Default::default()
        });
        config.llm.groq = Some(GroqConfig {
            api_key: groq.to_string(),
            ..Default::default()
        });
        config
    }

    #[test]
    fn test_resolve_env_var() {
        // Non-env-var strings pass through
        assert_eq!(resolve_env_var("plain-key"), Some("plain-key".to_string()));
        // Empty returns None
        assert_eq!(resolve_env_var(""), None);
        // Unset env var returns None
        assert_eq!(resolve_env_var("${DEFINITELY_NOT_SET_URAI_123}"), None);
    }

    #[test]
    fn test_resolve_env_var_reads_environment() {
        std::env::set_var("URAI_TEST_RESOLVE_KEY", "from-env");
        assert_eq!(
            resolve_env_var("${URAI_TEST_RESOLVE_KEY}"),
            Some("from-env".to_string())
        );
    }

    #[test]
    fn test_factory_builds_each_model() {
        let config = config_with_keys("g-key", "q-key");
        let timeout = Duration::from_secs(5);

        let gemini = ProviderFactory::create(Model::Gemini, &config.llm, None, timeout).unwrap();
        assert_eq!(gemini.name(), "gemini");
        assert_eq!(gemini.timeout(), timeout);

        let groq = ProviderFactory::create(Model::Groq, &config.llm, None, timeout).unwrap();
        assert_eq!(groq.name(), "groq");
    }

    #[test]
    fn test_factory_missing_key_names_env_var() {
        let config = config_with_keys("", "${DEFINITELY_NOT_SET_URAI_456}");
        let timeout = Duration::from_secs(5);

        let err = ProviderFactory::create(Model::Groq, &config.llm, None, timeout)
            .err()
            .unwrap();
        assert!(err.to_string().contains("GROQ_API_KEY"));

        let err = ProviderFactory::create(Model::Gemini, &config.llm, None, timeout)
            .err()
            .unwrap();
        assert!(err.to_string().contains("GEMINI_API_KEY"));
    }

    #[test]
    fn test_registry_skips_unconfigured_models() {
        let config = config_with_keys("g-key", "");
        let registry = ProviderRegistry::from_config(&config);

        assert_eq!(registry.models(), vec![Model::Gemini]);
        assert!(registry.get(Model::Gemini).is_ok());
        let err = registry.get(Model::Groq).err().unwrap();
        assert!(matches!(err, ProviderError::NotConfigured(Model::Groq)));
    }

    #[tokio::test]
    async fn test_registry_keeps_each_backend_model() {
        use crate::image::ImagePayload;
        use crate::provider::DescriptionRequest;
        use crate::types::Platform;
        use serde_json::json;
        use wiremock::matchers::{body_partial_json, method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(body_partial_json(json!({ "model": GroqConfig::default().model })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{ "message": { "role": "assistant", "content": "ok" } }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let mut config = config_with_keys("g-key", "q-key");
        if let Some(gemini) = config.llm.gemini.as_mut() {
            gemini.model = "gemini-2.0-flash".to_string();
        }
        if let Some(groq) = config.llm.groq.as_mut() {
            groq.endpoint = server.uri();
        }

        let registry = ProviderRegistry::from_config(&config);
        let request = DescriptionRequest::new(
            ImagePayload::from_data_url("data:image/jpeg;base64,AAAA"),
            Platform::Twitter,
        );
        let text = registry
            .get(Model::Groq)
            .unwrap()
            .generate(&request)
            .await
            .unwrap();
        assert_eq!(text, "ok");
    }

    #[test]
    fn test_empty_registry() {
        let registry = ProviderRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.models().is_empty());
    }
}
