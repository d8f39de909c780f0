//! Unified error handling
//!
//! [`AppError`] pairs an [`ErrorCode`] with a message and renders itself as an
//! HTML error page. Server errors are logged and shown with the generic code
//! message; the full message travels in the response extensions as an
//! [`ErrorDetail`] so the debug middleware can put it back on the page.
//!
//! ```ignore
//! let cafe = cafe::find_by_id(&state.pool, id)
//!     .await?
//!     .ok_or_else(|| AppError::cafe_not_found(id))?;
//! ```

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use shared::{CafeField, ErrorCode};
use tracing::error;

use crate::db::repository::RepoError;
use crate::views;

/// Application error with a structured error code
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Full error message
    pub message: String,
}

/// Full message of an error response, kept out of the page body unless debug is on
#[derive(Debug, Clone)]
pub struct ErrorDetail {
    pub code: ErrorCode,
    pub message: String,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    // ==================== Convenience constructors ====================

    pub fn cafe_not_found(id: i64) -> Self {
        Self::with_message(ErrorCode::CafeNotFound, format!("Cafe {id} not found"))
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::AlreadyExists, msg)
    }

    /// Uniqueness violation on a cafe column
    pub fn duplicate(column: &str) -> Self {
        match CafeField::from_column(column) {
            Some(CafeField::Name) => Self::new(ErrorCode::CafeNameExists),
            Some(CafeField::MapUrl) => Self::new(ErrorCode::CafeMapUrlExists),
            _ => Self::conflict(format!("{column} already exists")),
        }
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::DatabaseError, msg)
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => Self::with_message(ErrorCode::NotFound, msg),
            RepoError::Duplicate(column) => Self::duplicate(&column),
            RepoError::Database(msg) => Self::database(msg),
        }
    }
}

impl From<askama::Error> for AppError {
    fn from(err: askama::Error) -> Self {
        Self::with_message(ErrorCode::TemplateError, err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.http_status();

        let public_message = if status.is_server_error() {
            error!(target: "internal", code = %self.code, error = %self.message, "Request failed");
            self.code.message().to_string()
        } else {
            self.message.clone()
        };

        let mut response = (status, views::error_page(status, &public_message, None)).into_response();
        response.extensions_mut().insert(ErrorDetail {
            code: self.code,
            message: self.message,
        });
        response
    }
}
