//! Error codes
//!
//! Codes are organized by category:
//! - 0xxx: General errors
//! - 6xxx: Cafe errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Serialized as its `u16` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,

    // ==================== 6xxx: Cafe ====================
    /// Cafe not found
    CafeNotFound = 6001,
    /// Cafe name already taken
    CafeNameExists = 6002,
    /// Cafe map link already taken
    CafeMapUrlExists = 6003,

    // ==================== 9xxx: System ====================
    /// Database error
    DatabaseError = 9002,
    /// Template rendering failed
    TemplateError = 9003,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the user-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",

            ErrorCode::CafeNotFound => "Cafe not found",
            ErrorCode::CafeNameExists => "A cafe with this name already exists",
            ErrorCode::CafeMapUrlExists => "A cafe with this map link already exists",

            ErrorCode::DatabaseError => "Database error",
            ErrorCode::TemplateError => "Failed to render page",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid error code: {0}")]
pub struct InvalidErrorCode(pub u16);

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),

            6001 => Ok(ErrorCode::CafeNotFound),
            6002 => Ok(ErrorCode::CafeNameExists),
            6003 => Ok(ErrorCode::CafeMapUrlExists),

            9002 => Ok(ErrorCode::DatabaseError),
            9003 => Ok(ErrorCode::TemplateError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
