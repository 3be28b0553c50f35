//! Caption session: the current selection and its single description slot.
//!
//! Every change to the image, platform or model clears the description and
//! issues a fresh request. Requests carry a sequence number taken when they
//! start; a completion is applied only if no newer request has started since,
//! so the latest selection always wins even when responses arrive out of
//! order.

use crate::error::SessionError;
use crate::image::ImagePayload;
use crate::provider::{DescriptionRequest, ProviderRegistry};
use crate::types::{Model, Platform};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Notice shown in place of a description when generation fails.
pub const GENERIC_FAILURE_NOTICE: &str = "Failed to generate description. Please try again.";

/// What the description slot currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "text", rename_all = "lowercase")]
pub enum DescriptionState {
    Empty,
    Loading,
    Ready(String),
    Failed(String),
}

/// How a triggering action ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// No image is loaded, so nothing was requested.
    Skipped,
    /// The result became the current description.
    Current(String),
    /// A newer request started before this one finished; the result was dropped.
    Superseded,
}

struct SessionState {
    image: Option<ImagePayload>,
    platform: Platform,
    model: Model,
    custom_prompt: Option<String>,
    description: DescriptionState,
    latest_seq: u64,
}

/// Holds one user's selection and the description generated for it.
pub struct CaptionSession {
    registry: Arc<ProviderRegistry>,
    state: Mutex<SessionState>,
}

impl CaptionSession {
    pub fn new(registry: Arc<ProviderRegistry>, platform: Platform, model: Model) -> Self {
        Self {
            registry,
            state: Mutex::new(SessionState {
                image: None,
                platform,
                model,
                custom_prompt: None,
                description: DescriptionState::Empty,
                latest_seq: 0,
            }),
        }
    }

    /// Load a new image and describe it for the current platform.
    ///
    /// An empty payload unloads the image and makes no request.
    pub async fn load_image(&self, image: ImagePayload) -> Result<Outcome, SessionError> {
        {
            let mut state = self.state.lock().await;
            state.image = (!image.is_empty()).then_some(image);
            Self::invalidate(&mut state);
        }
        self.run().await
    }

    /// Switch platform; regenerates if an image is loaded.
    pub async fn set_platform(&self, platform: Platform) -> Result<Outcome, SessionError> {
        {
            let mut state = self.state.lock().await;
            state.platform = platform;
            Self::invalidate(&mut state);
        }
        self.run().await
    }

    /// Switch model; regenerates if an image is loaded.
    pub async fn set_model(&self, model: Model) -> Result<Outcome, SessionError> {
        {
            let mut state = self.state.lock().await;
            state.model = model;
            Self::invalidate(&mut state);
        }
        self.run().await
    }

    /// Set the context used by the next request. Does not regenerate.
    pub async fn set_custom_prompt(&self, custom_prompt: Option<String>) {
        self.state.lock().await.custom_prompt = custom_prompt;
    }

    /// Regenerate for the current selection.
    ///
    /// Fails with [`SessionError::NoImage`] before any request when no
    /// image is loaded.
    pub async fn regenerate(&self) -> Result<Outcome, SessionError> {
        {
            let mut state = self.state.lock().await;
            if state.image.is_none() {
                return Err(SessionError::NoImage);
            }
            Self::invalidate(&mut state);
        }
        self.run().await
    }

    pub async fn description(&self) -> DescriptionState {
        self.state.lock().await.description.clone()
    }

    pub async fn platform(&self) -> Platform {
        self.state.lock().await.platform
    }

    pub async fn model(&self) -> Model {
        self.state.lock().await.model
    }

    pub async fn is_loading(&self) -> bool {
        self.state.lock().await.description == DescriptionState::Loading
    }

    /// Drop the shown result and fence off every in-flight request.
    fn invalidate(state: &mut SessionState) {
        state.latest_seq += 1;
        state.description = DescriptionState::Empty;
    }

    async fn run(&self) -> Result<Outcome, SessionError> {
        let (seq, provider, request) = {
            let mut state = self.state.lock().await;
            let Some(image) = state.image.clone() else {
                return Ok(Outcome::Skipped);
            };
            let provider = match self.registry.get(state.model) {
                Ok(provider) => provider,
                Err(e) => {
                    state.description =
                        DescriptionState::Failed(GENERIC_FAILURE_NOTICE.to_string());
                    return Err(e.into());
                }
            };

            state.latest_seq += 1;
            state.description = DescriptionState::Loading;
            let request = DescriptionRequest::new(image, state.platform)
                .with_custom_prompt(state.custom_prompt.clone());
            (state.latest_seq, provider, request)
        };

        tracing::debug!(
            seq,
            provider = provider.name(),
            platform = %request.platform,
            "Requesting description"
        );
        let result = provider.generate(&request).await;

        let mut state = self.state.lock().await;
        if state.latest_seq != seq {
            tracing::debug!(seq, latest = state.latest_seq, "Discarding superseded result");
            return Ok(Outcome::Superseded);
        }

        match result {
            Ok(text) => {
                state.description = DescriptionState::Ready(text.clone());
                Ok(Outcome::Current(text))
            }
            Err(e) => {
                tracing::warn!("Description generation failed via {}: {e}", provider.name());
                state.description = DescriptionState::Failed(GENERIC_FAILURE_NOTICE.to_string());
                Err(e.into())
            }
        }
    }
}
