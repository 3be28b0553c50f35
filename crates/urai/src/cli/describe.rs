//! The `urai describe` command: caption one image for one or more platforms.

use anyhow::Context;
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;
use urai_core::config::LlmConfig;
use urai_core::{
    CaptionRecord, CaptionSession, Config, ImagePayload, Model, Outcome, Platform,
    ProviderFactory, ProviderRegistry, GENERIC_FAILURE_NOTICE,
};

use super::types::{ModelArg, OutputFormat, PlatformArg};

/// Arguments for the `describe` command.
#[derive(Args, Debug)]
pub struct DescribeArgs {
    /// Image file to describe
    pub input: PathBuf,

    /// Target platform; repeat to caption for several platforms in turn
    #[arg(short, long = "platform", value_enum)]
    pub platforms: Vec<PlatformArg>,

    /// AI backend [default: from config]
    #[arg(short, long, value_enum)]
    pub model: Option<ModelArg>,

    /// Extra context appended to the platform instruction
    #[arg(short, long)]
    pub context: Option<String>,

    /// Backend model name, e.g. gemini-1.5-pro
    #[arg(long)]
    pub llm_model: Option<String>,

    /// API key for the selected backend (used for this run only)
    #[arg(long, env = "URAI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Execute the describe command.
pub async fn execute(args: DescribeArgs, config: &Config) -> anyhow::Result<()> {
    let model = args
        .model
        .map(Model::from)
        .unwrap_or(config.general.default_model);
    let platforms: Vec<Platform> = if args.platforms.is_empty() {
        vec![config.general.default_platform]
    } else {
        args.platforms.iter().copied().map(Platform::from).collect()
    };

    let mut llm_config = config.llm.clone();
    if let Some(key) = &args.api_key {
        inject_api_key(&mut llm_config, model, key);
    }
    let provider = ProviderFactory::create(
        model,
        &llm_config,
        args.llm_model.as_deref(),
        config.request_timeout(),
    )?;
    let mut registry = ProviderRegistry::new();
    registry.register(model, provider);

    let image = ImagePayload::from_path(&args.input)
        .await
        .with_context(|| format!("Failed to read image: {}", args.input.display()))?;
    tracing::info!(
        "Describing {} for {} platform(s) with {model}",
        args.input.display(),
        platforms.len()
    );

    let session = CaptionSession::new(Arc::new(registry), platforms[0], model);
    session.set_custom_prompt(args.context.clone()).await;

    let mut writer =
        urai_core::OutputWriter::new(std::io::stdout(), args.format.into(), args.pretty);
    let mut failed = 0;

    for (i, platform) in platforms.iter().copied().enumerate() {
        // The first platform rides on the upload; later ones are selector changes.
        let outcome = if i == 0 {
            session.load_image(image.clone()).await
        } else {
            session.set_platform(platform).await
        };

        match outcome {
            Ok(Outcome::Current(text)) => {
                writer.write(&CaptionRecord::new(platform, model, text))?;
            }
            Ok(other) => tracing::warn!("No description for {platform}: {other:?}"),
            Err(e) => {
                tracing::error!("{}: {e}", platform.title());
                failed += 1;
            }
        }
    }
    writer.flush()?;
    tracing::debug!("Wrote {} caption(s)", writer.items_written());

    if failed > 0 {
        anyhow::bail!(
            "{GENERIC_FAILURE_NOTICE} ({failed} of {} platform(s) failed)",
            platforms.len()
        );
    }
    Ok(())
}

/// Put a CLI-supplied API key into the config for this run.
fn inject_api_key(llm_config: &mut LlmConfig, model: Model, key: &str) {
    match model {
        Model::Gemini => {
            let cfg = llm_config.gemini.get_or_insert_with(Default::default);
            cfg.api_key = key.to_string();
        }
        Model::Groq => {
            let cfg = llm_config.groq.get_or_insert_with(Default::default);
            cfg.api_key = key.to_string();
        }
    }
}
