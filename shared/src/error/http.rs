//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::NotFound | Self::CafeNotFound => StatusCode::NOT_FOUND,

            Self::AlreadyExists | Self::CafeNameExists | Self::CafeMapUrlExists => {
                StatusCode::CONFLICT
            }

            Self::DatabaseError | Self::TemplateError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_status() {
        assert_eq!(ErrorCode::NotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorCode::CafeNotFound.http_status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_conflict_status() {
        assert_eq!(ErrorCode::CafeNameExists.http_status(), StatusCode::CONFLICT);
        assert_eq!(
            ErrorCode::CafeMapUrlExists.http_status(),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn test_system_errors_are_500() {
        for code in [ErrorCode::DatabaseError, ErrorCode::TemplateError] {
            assert_eq!(code.http_status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }
}
