//! URAI Core - platform-tailored social media captions for images.
//!
//! URAI turns an image plus a target platform into a caption written for
//! that platform's conventions, using a hosted vision LLM (Gemini or Groq).
//!
//! # Architecture
//!
//! ```text
//! Image + Platform + Model → Prompt Builder → Provider (HTTP) → Caption
//! ```
//!
//! The [`CaptionSession`] owns the current selection and makes sure only the
//! latest request's result is ever shown.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use urai_core::{CaptionSession, Config, ImagePayload, Model, Platform, ProviderRegistry};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load()?;
//!     let registry = Arc::new(ProviderRegistry::from_config(&config));
//!     let session = CaptionSession::new(registry, Platform::Instagram, Model::Gemini);
//!
//!     let image = ImagePayload::from_path("./beach.jpg".as_ref()).await?;
//!     let outcome = session.load_image(image).await?;
//!     println!("{outcome:?}");
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod config;
pub mod demo;
pub mod error;
pub mod image;
pub mod output;
pub mod prompt;
pub mod provider;
pub mod session;
pub mod types;

// Re-exports for convenient access
pub use config::Config;
pub use demo::{DemoImageGenerator, GeneratedImage, ImageCategory};
pub use error::{ConfigError, ProviderError, SessionError, UnknownVariant};
pub use image::ImagePayload;
pub use output::{CaptionRecord, OutputFormat, OutputWriter};
pub use prompt::build_prompt;
pub use provider::{
    DescriptionProvider, DescriptionRequest, ProviderFactory, ProviderRegistry,
    FALLBACK_DESCRIPTION,
};
pub use session::{CaptionSession, DescriptionState, Outcome, GENERIC_FAILURE_NOTICE};
pub use types::{Model, Platform};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
