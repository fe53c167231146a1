//! Common API response types and body decoding.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;

/// `{"success": true}`, the reply of every mutation that has nothing else
/// to return.
#[derive(Debug, Clone, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        SuccessResponse { success: true }
    }
}

/// Decodes a JSON request body. Parse failures carry serde's message.
pub fn parse_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|e| ApiError::MalformedBody(e.to_string()))
}
