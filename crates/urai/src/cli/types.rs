//! CLI enum types: platform, model, output format.

use clap::ValueEnum;
use urai_core::{Model, OutputFormat as CoreOutputFormat, Platform};

/// Target platforms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PlatformArg {
    Twitter,
    Instagram,
    Pinterest,
    Youtube,
    Threads,
    Snapchat,
}

impl From<PlatformArg> for Platform {
    fn from(arg: PlatformArg) -> Self {
        match arg {
            PlatformArg::Twitter => Platform::Twitter,
            PlatformArg::Instagram => Platform::Instagram,
            PlatformArg::Pinterest => Platform::Pinterest,
            PlatformArg::Youtube => Platform::Youtube,
            PlatformArg::Threads => Platform::Threads,
            PlatformArg::Snapchat => Platform::Snapchat,
        }
    }
}

/// Supported AI backends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ModelArg {
    /// Google Gemini
    Gemini,
    /// Groq
    Groq,
}

impl From<ModelArg> for Model {
    fn from(arg: ModelArg) -> Self {
        match arg {
            ModelArg::Gemini => Model::Gemini,
            ModelArg::Groq => Model::Groq,
        }
    }
}

/// Supported output formats.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// Platform heading followed by the caption
    #[default]
    Text,
    /// One JSON object per caption
    Json,
    /// One JSON object per line (newline-delimited)
    Jsonl,
}

impl From<OutputFormat> for CoreOutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => CoreOutputFormat::Text,
            OutputFormat::Json => CoreOutputFormat::Json,
            OutputFormat::Jsonl => CoreOutputFormat::JsonLines,
        }
    }
}
