//! The client page served for every non-API path.

use axum::http::{header, Uri};
use axum::response::{IntoResponse, Response};

use crate::error::ApiError;

const INDEX_HTML: &str = include_str!("../../assets/index.html");

/// Router fallback: unknown `/api/` paths are 404, everything else gets the
/// page.
pub async fn fallback(uri: Uri) -> Response {
    if uri.path().starts_with("/api/") {
        return ApiError::NotFound.into_response();
    }
    index().await.into_response()
}

pub async fn index() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/html;charset=UTF-8")], INDEX_HTML)
}
