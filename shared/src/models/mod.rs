//! Data models

pub mod cafe;

pub use cafe::{Cafe, CafeField, CafeFields, FieldKind, FieldValue, MAX_TEXT_LEN};
