//! Notes: titled rich-text entries.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::id::Stamp;

/// A single note as stored in the document.
///
/// `content` is rich-text markup produced by the browser editor and is
/// stored opaquely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    #[serde(default, deserialize_with = "crate::lenient::null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "crate::lenient::null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "crate::lenient::null_as_default")]
    pub content: String,
    #[serde(default, deserialize_with = "crate::lenient::null_as_default")]
    pub date: String,
    /// Fields written by clients that this crate does not model.
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_json::Value>,
}

/// Input for creating or replacing a note.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoteDraft {
    /// Target note. `None` creates a new note.
    pub id: Option<String>,
    pub title: String,
    pub content: String,
}

impl NoteDraft {
    /// The id of the note this draft replaces. Empty ids count as absent.
    pub fn target(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }

    /// Builds the note this draft turns into under `stamp`.
    ///
    /// Updates keep the draft's id; only the `date` comes from the stamp.
    pub fn into_note(self, stamp: Stamp) -> Note {
        let id = match self.target() {
            Some(id) => id.to_owned(),
            None => stamp.id,
        };
        Note {
            id,
            title: self.title,
            content: self.content,
            date: stamp.date,
            extra: IndexMap::new(),
        }
    }
}
