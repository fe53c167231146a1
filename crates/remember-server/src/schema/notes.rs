//! Note request types.

use remember_core::lenient::null_as_default;
use remember_core::NoteDraft;
use serde::Deserialize;

/// Body of `POST /api/notes`. A missing, null or empty `id` creates a note.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertNoteRequest {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
}

impl From<UpsertNoteRequest> for NoteDraft {
    fn from(req: UpsertNoteRequest) -> Self {
        NoteDraft {
            id: req.id,
            title: req.title,
            content: req.content,
        }
    }
}

/// Body of `POST /api/delete-note`.
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteNoteRequest {
    #[serde(default)]
    pub id: Option<String>,
}
