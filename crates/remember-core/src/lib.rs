//! Data model and mutation logic for the remember notes-and-tasks document.
//!
//! Everything here is pure: no storage, no HTTP. The server loads a
//! [`Document`], applies one mutation from this crate, and stores the result.

pub mod document;
pub mod error;
pub mod id;
pub mod lenient;
pub mod note;
pub mod ops;
pub mod todo;

// Re-export commonly used types
pub use document::{Document, EMPTY_DOCUMENT};
pub use error::CoreError;
pub use id::{Stamp, Stamper};
pub use note::{Note, NoteDraft};
pub use ops::{Direction, TodoCommand};
pub use todo::{Todo, TodoPatch};
