//! In-memory implementation of [`DocumentStore`].
//!
//! [`InMemoryStore`] is a first-class backend for tests and ephemeral
//! servers. It has identical semantics to the SQLite backend.

use std::collections::BTreeMap;

use crate::error::StorageError;
use crate::traits::DocumentStore;
use crate::types::DocumentKey;

/// Ordered map of keys to bytes; nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    documents: BTreeMap<DocumentKey, Vec<u8>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        InMemoryStore::default()
    }
}

impl DocumentStore for InMemoryStore {
    fn get(&self, key: &DocumentKey) -> Result<Option<Vec<u8>>, StorageError> {
        Ok(self.documents.get(key).cloned())
    }

    fn put(&mut self, key: &DocumentKey, value: &[u8]) -> Result<(), StorageError> {
        self.documents.insert(key.clone(), value.to_vec());
        Ok(())
    }

    fn delete(&mut self, key: &DocumentKey) -> Result<bool, StorageError> {
        Ok(self.documents.remove(key).is_some())
    }

    fn keys(&self) -> Result<Vec<DocumentKey>, StorageError> {
        Ok(self.documents.keys().cloned().collect())
    }
}
