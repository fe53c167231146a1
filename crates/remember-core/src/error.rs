//! Core error types for remember-core.
//!
//! Uses `thiserror` for structured, matchable error variants covering the
//! failure modes of decoding documents and commands.

use thiserror::Error;

/// Core errors produced by the remember-core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The stored document or a request body is not valid JSON of the
    /// expected shape.
    #[error("{0}")]
    Serialization(#[from] serde_json::Error),

    /// A todo command carried an invalid value.
    #[error("invalid todo command: {reason}")]
    InvalidCommand { reason: String },
}
