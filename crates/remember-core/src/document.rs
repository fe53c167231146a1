//! The per-user document and every mutation applied to it.
//!
//! A [`Document`] is loaded whole, changed in memory and written back whole.
//! Mutations that reference an id that is not present are silent no-ops;
//! callers learn about it only through the returned flag or count.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::id::{parse_date, Stamp};
use crate::note::{Note, NoteDraft};
use crate::ops::{Direction, TodoCommand};
use crate::todo::{Todo, TodoPatch};

/// Body served when a user has no stored document yet.
pub const EMPTY_DOCUMENT: &str = r#"{"notes":[],"todos":[],"completedTodos":[]}"#;

/// Notes, pending todos and completed todos for one user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(default, deserialize_with = "crate::lenient::null_as_default")]
    pub notes: Vec<Note>,
    /// Pending todos in the user's chosen order.
    #[serde(default, deserialize_with = "crate::lenient::null_as_default")]
    pub todos: Vec<Todo>,
    #[serde(default, deserialize_with = "crate::lenient::null_as_default")]
    pub completed_todos: Vec<Todo>,
    /// Top-level fields written by clients that this crate does not model.
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_json::Value>,
}

impl Document {
    /// Decodes stored bytes. An absent record should be treated as
    /// [`Document::default`] by the caller.
    pub fn decode(bytes: &[u8]) -> Result<Self, CoreError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    pub fn encode(&self) -> Result<Vec<u8>, CoreError> {
        Ok(serde_json::to_vec(self)?)
    }

    // -----------------------------------------------------------------------
    // Notes
    // -----------------------------------------------------------------------

    /// Creates or replaces a note and returns the resulting note.
    ///
    /// Without an id the note is prepended. With an id, the matching note is
    /// replaced in place (its `date` is reset to the stamp's); an unknown id
    /// leaves the list untouched and the returned note is not stored.
    pub fn upsert_note(&mut self, draft: NoteDraft, stamp: Stamp) -> Note {
        let target = draft.target().map(str::to_owned);
        let note = draft.into_note(stamp);
        match target {
            None => self.notes.insert(0, note.clone()),
            Some(id) => {
                if let Some(existing) = self.notes.iter_mut().find(|n| n.id == id) {
                    *existing = note.clone();
                }
            }
        }
        note
    }

    /// Removes every note with the given id. Returns how many were removed.
    pub fn delete_note(&mut self, id: &str) -> usize {
        let before = self.notes.len();
        self.notes.retain(|n| n.id != id);
        before - self.notes.len()
    }

    // -----------------------------------------------------------------------
    // Todos
    // -----------------------------------------------------------------------

    /// Applies one todo command. Returns `false` when the command referenced
    /// a todo that is not pending, or a move hit a list boundary.
    ///
    /// `stamp` is only consumed by [`TodoCommand::Create`].
    pub fn apply_todo_command(&mut self, command: TodoCommand, stamp: Stamp) -> bool {
        match command {
            TodoCommand::Complete { id } => self.complete_todo(&id),
            TodoCommand::Move { id, direction } => self.move_todo(&id, direction),
            TodoCommand::Update { id, patch } => self.update_todo(&id, patch),
            TodoCommand::Create {
                content,
                start_time,
                end_time,
            } => {
                self.create_todo(content, start_time, end_time, stamp);
                true
            }
        }
    }

    /// Moves a pending todo to the end of `completedTodos`.
    pub fn complete_todo(&mut self, id: &str) -> bool {
        let Some(index) = self.pending_index(id) else {
            return false;
        };
        let mut todo = self.todos.remove(index);
        todo.completed = true;
        self.completed_todos.push(todo);
        true
    }

    /// Swaps a pending todo with its neighbor in `direction`.
    pub fn move_todo(&mut self, id: &str, direction: Direction) -> bool {
        let Some(index) = self.pending_index(id) else {
            return false;
        };
        let target = match direction {
            Direction::Up if index > 0 => index - 1,
            Direction::Down if index + 1 < self.todos.len() => index + 1,
            _ => return false,
        };
        self.todos.swap(index, target);
        true
    }

    pub fn update_todo(&mut self, id: &str, patch: TodoPatch) -> bool {
        let Some(index) = self.pending_index(id) else {
            return false;
        };
        patch.apply(&mut self.todos[index]);
        true
    }

    /// Appends a new pending todo and returns a reference to it.
    pub fn create_todo(
        &mut self,
        content: String,
        start_time: Option<String>,
        end_time: Option<String>,
        stamp: Stamp,
    ) -> &Todo {
        self.todos
            .push(Todo::pending(content, start_time, end_time, stamp));
        &self.todos[self.todos.len() - 1]
    }

    fn pending_index(&self, id: &str) -> Option<usize> {
        self.todos.iter().position(|t| t.id == id)
    }

    // -----------------------------------------------------------------------
    // Presentation
    // -----------------------------------------------------------------------

    /// Orders the lists the way clients display them: notes newest first,
    /// pending todos oldest first, completed todos newest first.
    ///
    /// Sorting is stable. Entries whose `date` does not parse count as the
    /// oldest.
    pub fn sort_for_display(&mut self) {
        self.notes
            .sort_by(|a, b| parse_date(&b.date).cmp(&parse_date(&a.date)));
        self.todos
            .sort_by(|a, b| parse_date(&a.date).cmp(&parse_date(&b.date)));
        self.completed_todos
            .sort_by(|a, b| parse_date(&b.date).cmp(&parse_date(&a.date)));
    }
}
