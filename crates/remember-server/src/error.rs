//! API error types with HTTP status code mapping.
//!
//! [`ApiError`] is the unified error type for all API endpoints. It implements
//! `axum::response::IntoResponse`: unknown routes become a bare `404 Not
//! Found`, everything else a `500` with an `{"error": message}` body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// API errors with HTTP status code mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// No API route for this path and method (404).
    #[error("Not Found")]
    NotFound,

    /// The request body is not valid JSON or not a valid command (500).
    #[error("{0}")]
    MalformedBody(String),

    /// Storage or document decoding failure (500).
    #[error("{0}")]
    InternalError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Not Found").into_response(),
            ApiError::MalformedBody(msg) => {
                tracing::warn!(error = %msg, "rejected request body");
                error_body(msg)
            }
            ApiError::InternalError(msg) => {
                tracing::error!(error = %msg, "request failed");
                error_body(msg)
            }
        }
    }
}

fn error_body(message: String) -> Response {
    let body = serde_json::json!({ "error": message });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
}

impl From<remember_core::CoreError> for ApiError {
    fn from(err: remember_core::CoreError) -> Self {
        match &err {
            remember_core::CoreError::InvalidCommand { .. } => {
                ApiError::MalformedBody(err.to_string())
            }
            remember_core::CoreError::Serialization(_) => ApiError::InternalError(err.to_string()),
        }
    }
}

impl From<remember_storage::StorageError> for ApiError {
    fn from(err: remember_storage::StorageError) -> Self {
        ApiError::InternalError(err.to_string())
    }
}
