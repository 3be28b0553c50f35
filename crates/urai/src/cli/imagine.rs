//! The `urai imagine` command: demo image generation.
//!
//! No image is generated. A stock photo URL is picked from a small pool
//! based on keywords in the prompt.

use clap::Args;
use std::time::Duration;
use urai_core::{Config, DemoImageGenerator, Model};

use super::types::ModelArg;

/// Arguments for the `imagine` command.
#[derive(Args, Debug)]
pub struct ImagineArgs {
    /// What the image should show
    pub prompt: String,

    /// AI backend to pretend to use [default: from config]
    #[arg(short, long, value_enum)]
    pub model: Option<ModelArg>,

    /// Print the full result as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn execute(args: ImagineArgs, config: &Config) -> anyhow::Result<()> {
    if args.prompt.trim().is_empty() {
        anyhow::bail!("Please enter a prompt");
    }
    let model = args
        .model
        .map(Model::from)
        .unwrap_or(config.general.default_model);

    tracing::warn!("Image generation is a demo: the result is a stock photo, not a generated image");
    let generator = DemoImageGenerator::new(Duration::from_millis(config.demo.image_delay_ms));
    let image = generator.generate(&args.prompt, model).await;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&image)?);
    } else {
        println!("{}", image.image_url);
    }
    Ok(())
}
