//! HTTP handler modules for the remember API.
//!
//! Each sub-module implements thin handlers that parse requests, acquire the
//! service lock, delegate to [`DocumentService`](crate::service::DocumentService),
//! and return JSON responses. No business logic lives in handlers.
//!
//! Bodies are taken as raw bytes and decoded with
//! [`parse_json`](crate::schema::common::parse_json) so that malformed JSON
//! reports the same way as every other failure.

pub mod data;
pub mod notes;
pub mod page;
pub mod todos;

use crate::error::ApiError;

/// Answers API paths and methods that have no handler.
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
