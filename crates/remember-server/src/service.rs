//! DocumentService: the single coordinator between HTTP handlers and the
//! core/storage crates.
//!
//! Every mutating call follows the same cycle: load the user's document,
//! apply one change from `remember_core`, write the whole document back.
//! Handlers hold the service lock for the full cycle, so requests served by
//! one process never interleave their read-modify-write.

use remember_core::{Document, Note, NoteDraft, Stamper, TodoCommand, EMPTY_DOCUMENT};
use remember_storage::{DocumentKey, DocumentStore};

use crate::error::ApiError;

/// Loads, mutates and stores the document for one configured user.
pub struct DocumentService {
    store: Box<dyn DocumentStore>,
    key: DocumentKey,
    stamper: Stamper,
}

impl DocumentService {
    pub fn new(store: Box<dyn DocumentStore>, key: DocumentKey) -> Self {
        DocumentService {
            store,
            key,
            stamper: Stamper::new(),
        }
    }

    /// Returns the stored document bytes untouched, or the empty document
    /// if nothing has been stored yet.
    pub fn fetch_raw(&self) -> Result<Vec<u8>, ApiError> {
        let stored = self.store.get(&self.key)?;
        Ok(stored.unwrap_or_else(|| EMPTY_DOCUMENT.as_bytes().to_vec()))
    }

    /// Overwrites the stored document with `body`.
    ///
    /// `body` must be valid JSON; its shape is not checked.
    pub fn replace(&mut self, body: &[u8]) -> Result<(), ApiError> {
        serde_json::from_slice::<serde::de::IgnoredAny>(body)
            .map_err(|e| ApiError::MalformedBody(e.to_string()))?;
        self.store.put(&self.key, body)?;
        tracing::debug!(key = %self.key, bytes = body.len(), "document replaced");
        Ok(())
    }

    /// Creates or updates a note and returns the resulting note.
    pub fn upsert_note(&mut self, draft: NoteDraft) -> Result<Note, ApiError> {
        let mut document = self.load()?;
        let creating = draft.target().is_none();
        let note = document.upsert_note(draft, self.stamper.stamp());
        self.save(&document)?;
        tracing::debug!(key = %self.key, note = %note.id, creating, "note upserted");
        Ok(note)
    }

    /// Removes a note by id. Returns the number of notes removed.
    pub fn delete_note(&mut self, id: &str) -> Result<usize, ApiError> {
        let mut document = self.load()?;
        let removed = document.delete_note(id);
        self.save(&document)?;
        tracing::debug!(key = %self.key, note = id, removed, "note deleted");
        Ok(removed)
    }

    /// Applies one todo command. Returns whether anything changed.
    pub fn apply_todo_command(&mut self, command: TodoCommand) -> Result<bool, ApiError> {
        let mut document = self.load()?;
        let kind = command.kind();
        let applied = document.apply_todo_command(command, self.stamper.stamp());
        self.save(&document)?;
        tracing::debug!(key = %self.key, kind, applied, "todo command");
        Ok(applied)
    }

    /// Decodes the stored document, or starts from an empty one.
    pub fn load(&self) -> Result<Document, ApiError> {
        match self.store.get(&self.key)? {
            Some(bytes) => Ok(Document::decode(&bytes)?),
            None => Ok(Document::default()),
        }
    }

    fn save(&mut self, document: &Document) -> Result<(), ApiError> {
        let bytes = document.encode()?;
        self.store.put(&self.key, &bytes)?;
        Ok(())
    }
}
