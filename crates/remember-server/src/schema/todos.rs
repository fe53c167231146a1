//! Todo request type and its resolution into a [`TodoCommand`].
//!
//! The endpoint accepts one loosely shaped body:
//!
//! | body | command |
//! |---|---|
//! | `action: "complete"`, `id` | [`TodoCommand::Complete`] |
//! | `action: "move"`, `id`, `direction` | [`TodoCommand::Move`] |
//! | `id`, any other `action` or none | [`TodoCommand::Update`] |
//! | no `id` | [`TodoCommand::Create`] |
//!
//! A `complete` or `move` that lacks its id, or a `move` whose direction is
//! not `up`/`down`, resolves to nothing and is answered as a success.

use indexmap::IndexMap;
use serde::Deserialize;

use remember_core::lenient::explicit;
use remember_core::{Direction, TodoCommand, TodoPatch};

/// Raw body of `POST /api/todos`.
///
/// `content` and the times keep an explicit `null` apart from an absent
/// field so that an update can clear them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoRequest {
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub direction: Option<String>,
    #[serde(default, deserialize_with = "explicit")]
    pub content: Option<Option<String>>,
    #[serde(default, deserialize_with = "explicit")]
    pub start_time: Option<Option<String>>,
    #[serde(default, deserialize_with = "explicit")]
    pub end_time: Option<Option<String>>,
    /// Any other fields; merged into the todo on update.
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_json::Value>,
}

impl TodoRequest {
    /// Resolves the body into the command it asks for, or `None` when it
    /// asks for nothing that can be carried out.
    pub fn into_command(self) -> Option<TodoCommand> {
        let id = self.id.filter(|id| !id.is_empty());
        match (self.action.as_deref(), id) {
            (Some("complete"), id) => Some(TodoCommand::Complete { id: id? }),
            (Some("move"), id) => {
                let direction = self.direction?.parse::<Direction>().ok()?;
                Some(TodoCommand::Move { id: id?, direction })
            }
            (_, Some(id)) => Some(TodoCommand::Update {
                id,
                patch: TodoPatch {
                    content: self.content.map(Option::unwrap_or_default),
                    start_time: self.start_time,
                    end_time: self.end_time,
                    extra: self.extra,
                },
            }),
            (_, None) => Some(TodoCommand::Create {
                content: self.content.flatten().unwrap_or_default(),
                start_time: self.start_time.flatten(),
                end_time: self.end_time.flatten(),
            }),
        }
    }
}
