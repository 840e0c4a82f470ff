//! Axum route handlers for the CV generation API.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::generation::generator::generate_cv;
use crate::generation::validation::validate_cv_request;
use crate::models::cv::{CvRequest, CvResponse};
use crate::state::AppState;

/// POST /api/v1/generate-cv
///
/// Validates the request, then runs the generation pipeline. LLM failures
/// are absorbed by the fallback, so any valid request returns 200 with
/// best-effort content; only validation failures surface as errors (422).
pub async fn handle_generate_cv(
    State(state): State<AppState>,
    Json(request): Json<CvRequest>,
) -> Result<Json<CvResponse>, AppError> {
    let request = validate_cv_request(request).map_err(AppError::Validation)?;

    let response = generate_cv(state.backend.as_ref(), &request).await;

    Ok(Json(response))
}
