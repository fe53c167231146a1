//! HTTP/JSON API server for the remember notes-and-tasks page.
//!
//! Serves the static client page and a small JSON API that loads one
//! document per user, applies a single mutation and stores it back. This
//! crate contains the server framework, API schema types, error handling,
//! configuration and route definitions.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod schema;
pub mod service;
pub mod state;
