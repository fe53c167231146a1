//! Storage-layer types for document identity.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Key under which one user's document is stored.
///
/// User documents live at `user_<id>`; [`DocumentKey::for_user`] builds that
/// form. Arbitrary keys are allowed through [`DocumentKey::raw`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DocumentKey(String);

impl DocumentKey {
    pub fn for_user(user_id: &str) -> Self {
        DocumentKey(format!("user_{}", user_id))
    }

    pub fn raw(key: impl Into<String>) -> Self {
        DocumentKey(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The user id of a `user_<id>` key; `None` for any other key.
    pub fn user_id(&self) -> Option<&str> {
        self.0.strip_prefix("user_")
    }
}

impl fmt::Display for DocumentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
