//! Error codes for the cafe directory
//!
//! - [`ErrorCode`]: standardized numeric codes with default messages
//! - HTTP status mapping via [`ErrorCode::http_status`]
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 6xxx: Cafe errors
//! - 9xxx: System errors

mod codes;
mod http;

pub use codes::{ErrorCode, InvalidErrorCode};
