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
/// The serialized shape is fixed for compatibility with existing consumers:
/// `{"status": "error", "message": "Failed to process CV data"}`. Error
/// detail is logged server-side, never leaked into the envelope.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Document ingest error: {0}")]
    Ingest(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Ingest(msg) => {
                tracing::error!("Ingest error: {msg}");
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({
            "status": "error",
            "message": "Failed to process CV data"
        }));

        (status, body).into_response()
    }
}
