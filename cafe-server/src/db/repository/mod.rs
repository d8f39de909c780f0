//! Repository Module
//!
//! CRUD operations over SQLite tables, as free functions taking the pool.

pub mod cafe;

use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    /// UNIQUE constraint violated; holds the offending column
    #[error("Duplicate: {0} already exists")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        if let Some(db_err) = err.as_database_error()
            && db_err.is_unique_violation()
        {
            return RepoError::Duplicate(unique_violation_column(db_err.message()));
        }
        RepoError::Database(err.to_string())
    }
}

/// Column named by a SQLite unique violation
///
/// SQLite reports `UNIQUE constraint failed: cafe.name`; for composite
/// constraints the first column is used.
fn unique_violation_column(message: &str) -> String {
    message
        .rsplit(": ")
        .next()
        .and_then(|cols| cols.split(',').next())
        .map(|col| col.trim())
        .map(|col| col.rsplit('.').next().unwrap_or(col))
        .unwrap_or(message)
        .to_string()
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_violation_column() {
        assert_eq!(
            unique_violation_column("UNIQUE constraint failed: cafe.name"),
            "name"
        );
        assert_eq!(
            unique_violation_column("UNIQUE constraint failed: cafe.map_url"),
            "map_url"
        );
        assert_eq!(
            unique_violation_column("UNIQUE constraint failed: cafe.name, cafe.location"),
            "name"
        );
    }
}
