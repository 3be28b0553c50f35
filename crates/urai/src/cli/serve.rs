//! The `urai serve` command: run the HTTP proxy.

use clap::Args;
use std::sync::Arc;
use std::time::Duration;
use urai_core::{Config, DemoImageGenerator, ProviderRegistry};

use crate::server::{self, AppState};

/// Arguments for the `serve` command.
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Address to listen on [default: from config]
    #[arg(short, long)]
    pub bind: Option<String>,

    /// Gemini model name, e.g. gemini-2.0-flash [default: from config]
    #[arg(long)]
    pub gemini_model: Option<String>,

    /// Groq model name [default: from config]
    #[arg(long)]
    pub groq_model: Option<String>,
}

pub async fn execute(args: ServeArgs, config: &Config) -> anyhow::Result<()> {
    let config = with_model_overrides(config, &args);
    let registry = ProviderRegistry::from_config(&config);
    if registry.is_empty() {
        tracing::warn!(
            "No provider has an API key; every describe request will fail. \
             Set GEMINI_API_KEY or GROQ_API_KEY."
        );
    }

    let state = AppState {
        registry: Arc::new(registry),
        generator: DemoImageGenerator::new(Duration::from_millis(config.demo.image_delay_ms)),
        default_model: config.general.default_model,
    };

    let bind = args.bind.as_deref().unwrap_or(&config.server.bind);
    server::run(state, bind).await
}

/// Apply the per-backend model flags to a copy of the config.
fn with_model_overrides(config: &Config, args: &ServeArgs) -> Config {
    let mut config = config.clone();
    if let Some(name) = &args.gemini_model {
        let cfg = config.llm.gemini.get_or_insert_with(Default::default);
        cfg.model = name.clone();
    }
    if let Some(name) = &args.groq_model {
        let cfg = config.llm.groq.get_or_insert_with(Default::default);
        cfg.model = name.clone();
    }
    config
}
