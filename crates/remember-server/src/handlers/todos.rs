//! Todo command handler.

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;

use crate::error::ApiError;
use crate::schema::common::{parse_json, SuccessResponse};
use crate::schema::todos::TodoRequest;
use crate::state::AppState;

/// Completes, moves, updates or creates a todo depending on the body.
///
/// `POST /api/todos`
///
/// The body is resolved into a [`remember_core::TodoCommand`] before the
/// service lock is taken. A body that resolves to no command, or a command
/// that matches nothing, still answers success.
pub async fn todo_command(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SuccessResponse>, ApiError> {
    let req: TodoRequest = parse_json(&body)?;
    let Some(command) = req.into_command() else {
        tracing::debug!("todo request resolved to no command");
        return Ok(Json(SuccessResponse::ok()));
    };
    let mut service = state.service.lock().await;
    service.apply_todo_command(command)?;
    Ok(Json(SuccessResponse::ok()))
}
