//! Commands accepted by the todo endpoint.
//!
//! The wire format multiplexes four behaviors on one body shape. Requests
//! are decoded into a [`TodoCommand`] up front so the mutation code never
//! has to guess between "update" and "create".

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::todo::TodoPatch;

/// Direction for reordering a pending todo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Toward the front of the list.
    Up,
    /// Toward the back of the list.
    Down,
}

impl FromStr for Direction {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            other => Err(CoreError::InvalidCommand {
                reason: format!("direction must be 'up' or 'down', got '{}'", other),
            }),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
        }
    }
}

/// One mutation of the todo lists.
#[derive(Debug, Clone, PartialEq)]
pub enum TodoCommand {
    /// Move a pending todo to `completedTodos` and mark it completed.
    Complete { id: String },
    /// Swap a pending todo with its neighbor.
    Move { id: String, direction: Direction },
    /// Shallow-merge fields into a pending todo.
    Update { id: String, patch: TodoPatch },
    /// Append a new pending todo.
    Create {
        content: String,
        start_time: Option<String>,
        end_time: Option<String>,
    },
}

impl TodoCommand {
    /// Short name used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            TodoCommand::Complete { .. } => "complete",
            TodoCommand::Move { .. } => "move",
            TodoCommand::Update { .. } => "update",
            TodoCommand::Create { .. } => "create",
        }
    }
}
