//! Key-value storage for remember documents.
//!
//! Provides the [`DocumentStore`] trait defining the storage contract that
//! all backends implement, plus the [`InMemoryStore`] and [`SqliteStore`] as
//! first-class backends.
//!
//! Values are opaque bytes. The store does not parse or validate documents;
//! that is the caller's concern.
//!
//! # Modules
//!
//! - [`error`]: StorageError enum with all failure modes
//! - [`types`]: DocumentKey
//! - [`traits`]: DocumentStore trait definition
//! - [`memory`]: InMemoryStore implementation
//! - [`schema`]: SQL schema constants and migration setup
//! - [`sqlite`]: SqliteStore implementation

pub mod error;
pub mod memory;
pub mod schema;
pub mod sqlite;
pub mod traits;
pub mod types;

// Re-export key types for ergonomic use.
pub use error::StorageError;
pub use memory::InMemoryStore;
pub use sqlite::SqliteStore;
pub use traits::DocumentStore;
pub use types::DocumentKey;
