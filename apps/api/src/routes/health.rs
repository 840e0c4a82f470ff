use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns a simple status object with service version and whether the LLM
/// path is enabled (an API key is configured).
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "cv-builder-api",
        "version": env!("CARGO_PKG_VERSION"),
        "llm_enabled": state.config.google_api_key.is_some(),
    }))
}
