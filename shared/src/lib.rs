//! Shared types for the cafe directory
//!
//! Models and error codes used by the server crate and its tests.

pub mod error;
pub mod models;

// Re-exports
pub use error::{ErrorCode, InvalidErrorCode};
pub use models::{Cafe, CafeField, CafeFields, FieldKind, FieldValue};
