//! Unified Result Types

use super::AppError;

/// Application-level Result type
///
/// Used in HTTP handlers and startup code
pub type AppResult<T> = Result<T, AppError>;
