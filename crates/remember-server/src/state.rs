//! Application state with a shared `DocumentService`.
//!
//! [`AppState`] wraps the service in `Arc<tokio::sync::Mutex<>>` for use with
//! axum handlers. `tokio::sync::Mutex` lets handlers await the lock without
//! blocking the runtime. The lock is held for a whole load/mutate/store
//! cycle, which makes it the single writer for the configured document key.

use std::sync::Arc;

use remember_storage::{DocumentKey, DocumentStore, InMemoryStore, SqliteStore};

use crate::config::{ServerConfig, StoreBackend};
use crate::error::ApiError;
use crate::service::DocumentService;

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<tokio::sync::Mutex<DocumentService>>,
}

impl AppState {
    /// Creates the state for a configured server, opening the SQLite database
    /// when that backend is selected.
    pub fn new(config: &ServerConfig) -> Result<Self, ApiError> {
        let store: Box<dyn DocumentStore> = match config.backend {
            StoreBackend::Sqlite => Box::new(SqliteStore::new(&config.db_path).map_err(|e| {
                ApiError::InternalError(format!(
                    "failed to open database '{}': {}",
                    config.db_path, e
                ))
            })?),
            StoreBackend::Memory => Box::new(InMemoryStore::new()),
        };
        Ok(Self::with_store(store, config.document_key()))
    }

    /// Creates a state backed by an in-memory store for the default user
    /// (for testing).
    pub fn in_memory() -> Self {
        Self::with_store(
            Box::new(InMemoryStore::new()),
            DocumentKey::for_user("default"),
        )
    }

    pub fn with_store(store: Box<dyn DocumentStore>, key: DocumentKey) -> Self {
        AppState {
            service: Arc::new(tokio::sync::Mutex::new(DocumentService::new(store, key))),
        }
    }
}
