//! Whole-document handlers.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::ApiError;
use crate::schema::common::SuccessResponse;
use crate::state::AppState;

/// Returns the stored document as-is.
///
/// `GET /api/data`
pub async fn fetch_document(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let service = state.service.lock().await;
    let body = service.fetch_raw()?;
    Ok(([(header::CONTENT_TYPE, "application/json")], body))
}

/// Replaces the stored document with the request body.
///
/// `POST /api/data`
pub async fn replace_document(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SuccessResponse>, ApiError> {
    let mut service = state.service.lock().await;
    service.replace(&body)?;
    Ok(Json(SuccessResponse::ok()))
}
