use aurora_narrative::api::{self, GenerateResponse};
use aurora_narrative::core::pipeline::NarrativeGenerator;
use aurora_narrative::schema::mode::{Mode, ModeInfo};
use axum::{
    body::Bytes,
    extract::State,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::error::HttpError;

/// Shared, read-only state handed to every handler.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub generator: NarrativeGenerator,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/generate", post(generate_handler))
        .route("/api/modes", get(modes_handler))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Generate a narrative from `{"prompt": ..., "mode": ...}`.
///
/// The body is parsed here rather than through the `Json` extractor so
/// that a missing content type or a non-object body goes through the same
/// validation as everything else.
pub async fn generate_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<GenerateResponse>, HttpError> {
    let data = api::process(&state.generator, &body)?;
    Ok(Json(GenerateResponse::Data { data }))
}

pub async fn modes_handler() -> impl IntoResponse {
    Json(Mode::ALL.map(ModeInfo::from))
}

pub async fn health_handler() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
