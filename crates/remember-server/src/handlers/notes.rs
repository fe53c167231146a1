//! Note handlers (upsert, delete).

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;

use remember_core::Note;

use crate::error::ApiError;
use crate::schema::common::{parse_json, SuccessResponse};
use crate::schema::notes::{DeleteNoteRequest, UpsertNoteRequest};
use crate::state::AppState;

/// Creates a note, or replaces the one named by `id`.
///
/// `POST /api/notes`
pub async fn upsert_note(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Note>, ApiError> {
    let req: UpsertNoteRequest = parse_json(&body)?;
    let mut service = state.service.lock().await;
    let note = service.upsert_note(req.into())?;
    Ok(Json(note))
}

/// Deletes a note by id. Unknown ids still succeed.
///
/// `POST /api/delete-note`
pub async fn delete_note(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SuccessResponse>, ApiError> {
    let req: DeleteNoteRequest = parse_json(&body)?;
    let mut service = state.service.lock().await;
    if let Some(id) = req.id.as_deref() {
        service.delete_note(id)?;
    }
    Ok(Json(SuccessResponse::ok()))
}
