//! Todos: pending and completed tasks.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::id::Stamp;

/// Fields a [`TodoPatch`] may never overwrite.
const PROTECTED_FIELDS: [&str; 3] = ["id", "date", "completed"];

/// A task, either pending (in `todos`) or completed (in `completedTodos`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    #[serde(default, deserialize_with = "crate::lenient::null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "crate::lenient::null_as_default")]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(default, deserialize_with = "crate::lenient::null_as_default")]
    pub completed: bool,
    #[serde(default, deserialize_with = "crate::lenient::null_as_default")]
    pub date: String,
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_json::Value>,
}

impl Todo {
    /// A new pending todo.
    pub fn pending(
        content: String,
        start_time: Option<String>,
        end_time: Option<String>,
        stamp: Stamp,
    ) -> Self {
        Todo {
            id: stamp.id,
            content,
            start_time,
            end_time,
            completed: false,
            date: stamp.date,
            extra: IndexMap::new(),
        }
    }
}

/// A shallow merge applied to an existing pending todo.
///
/// `None` fields leave the todo untouched. `Some(None)` on a time clears it.
/// Extra fields are copied over verbatim, except for the todo's identity and
/// lifecycle fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoPatch {
    pub content: Option<String>,
    pub start_time: Option<Option<String>>,
    pub end_time: Option<Option<String>>,
    pub extra: IndexMap<String, serde_json::Value>,
}

impl TodoPatch {
    pub fn apply(self, todo: &mut Todo) {
        if let Some(content) = self.content {
            todo.content = content;
        }
        if let Some(start_time) = self.start_time {
            todo.start_time = start_time;
        }
        if let Some(end_time) = self.end_time {
            todo.end_time = end_time;
        }
        for (key, value) in self.extra {
            if PROTECTED_FIELDS.contains(&key.as_str()) {
                continue;
            }
            todo.extra.insert(key, value);
        }
    }
}
