#![allow(dead_code)]

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Validation failures are the only errors the generation endpoint surfaces;
/// LLM-side failures are recovered through the fallback before they can
/// reach this type.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation failed with {} violation(s)", .0.len())]
    Validation(Vec<String>),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(details) => {
                let body = Json(json!({
                    "error": "VALIDATION_ERROR",
                    "message": "The request contains invalid fields",
                    "details": details,
                }));
                (StatusCode::UNPROCESSABLE_ENTITY, body).into_response()
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                let body = Json(json!({
                    "error": "INTERNAL_ERROR",
                    "message": "An internal server error occurred",
                    "details": [],
                }));
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
        }
    }
}
