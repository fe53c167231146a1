//! The [`DocumentStore`] trait defining the storage contract.
//!
//! All backends (InMemoryStore, SqliteStore) implement this trait, ensuring
//! they are fully swappable without changing the service layer.

use crate::error::StorageError;
use crate::types::DocumentKey;

/// A key-value store holding one serialized document per key.
///
/// Each `put` replaces the whole value atomically. There is no
/// compare-and-swap: concurrent writers to the same key race and the last
/// write wins. The trait is synchronous; the server serializes access behind
/// an async mutex.
pub trait DocumentStore: Send {
    /// Returns the stored bytes, or `None` if the key was never written.
    fn get(&self, key: &DocumentKey) -> Result<Option<Vec<u8>>, StorageError>;

    /// Stores `value` under `key`, overwriting any previous value.
    fn put(&mut self, key: &DocumentKey, value: &[u8]) -> Result<(), StorageError>;

    /// Removes a key. Returns whether it existed.
    fn delete(&mut self, key: &DocumentKey) -> Result<bool, StorageError>;

    /// Lists all stored keys in ascending order.
    fn keys(&self) -> Result<Vec<DocumentKey>, StorageError>;
}
