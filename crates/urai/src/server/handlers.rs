//! Route handlers for the proxy.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use urai_core::prompt::instruction;
use urai_core::{DescriptionRequest, GeneratedImage, ImagePayload, Model, Platform, SessionError};

use super::AppState;

/// Error body: `{"error": "..."}` with the given status.
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(serde_json::json!({ "error": self.message })),
        )
            .into_response()
    }
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    models: Vec<Model>,
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: urai_core::VERSION,
        models: state.registry.models(),
    })
}

#[derive(Serialize)]
pub struct PlatformInfo {
    platform: Platform,
    title: &'static str,
    instruction: &'static str,
}

pub async fn platforms() -> Json<Vec<PlatformInfo>> {
    Json(
        Platform::ALL
            .into_iter()
            .map(|platform| PlatformInfo {
                platform,
                title: platform.title(),
                instruction: instruction(platform),
            })
            .collect(),
    )
}

#[derive(Deserialize)]
pub struct DescribeBody {
    /// Base64 data URL of the image.
    image: String,
    platform: Platform,
    model: Option<Model>,
    custom_prompt: Option<String>,
}

#[derive(Serialize)]
pub struct DescribeResponse {
    description: String,
    platform: Platform,
    model: Model,
}

/// One provider call per request. Sequencing stale responses is the
/// client's job; the server holds no per-client state.
pub async fn describe(
    State(state): State<AppState>,
    Json(body): Json<DescribeBody>,
) -> Result<Json<DescribeResponse>, ApiError> {
    let image = ImagePayload::from_data_url(body.image);
    if image.is_empty() {
        return Err(ApiError::new(
            StatusCode::BAD_REQUEST,
            SessionError::NoImage.to_string(),
        ));
    }

    let model = body.model.unwrap_or(state.default_model);
    let provider = state
        .registry
        .get(model)
        .map_err(|e| ApiError::new(StatusCode::SERVICE_UNAVAILABLE, e.to_string()))?;

    let request =
        DescriptionRequest::new(image, body.platform).with_custom_prompt(body.custom_prompt);
    let start = Instant::now();

    match provider.generate(&request).await {
        Ok(description) => {
            tracing::info!(
                %model,
                platform = %body.platform,
                latency_ms = start.elapsed().as_millis() as u64,
                "Description generated"
            );
            Ok(Json(DescribeResponse {
                description,
                platform: body.platform,
                model,
            }))
        }
        Err(e) => {
            tracing::warn!(%model, platform = %body.platform, "Provider call failed: {e}");
            Err(ApiError::new(StatusCode::BAD_GATEWAY, e.to_string()))
        }
    }
}

#[derive(Deserialize)]
pub struct ImagesBody {
    prompt: String,
    model: Option<Model>,
}

pub async fn images(
    State(state): State<AppState>,
    Json(body): Json<ImagesBody>,
) -> Result<Json<GeneratedImage>, ApiError> {
    if body.prompt.trim().is_empty() {
        return Err(ApiError::new(StatusCode::BAD_REQUEST, "Please enter a prompt"));
    }
    let model = body.model.unwrap_or(state.default_model);
    Ok(Json(state.generator.generate(&body.prompt, model).await))
}
