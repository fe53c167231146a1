//! API schema types for request/response definitions.
//!
//! Each sub-module defines the request and response types for one group of
//! endpoints. Types use serde derives for JSON serialization/deserialization.

pub mod common;
pub mod notes;
pub mod todos;
