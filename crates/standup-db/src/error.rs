//! Mapping from `sqlx` errors to port errors.

use sqlx::error::ErrorKind;
use standup_core::RepositoryError;

/// Map a `sqlx` error raised while working on `what`.
pub(crate) fn map_sqlx_error(err: sqlx::Error, what: &str) -> RepositoryError {
    match &err {
        sqlx::Error::RowNotFound => RepositoryError::NotFound(what.to_string()),
        sqlx::Error::Database(db_err) => match db_err.kind() {
            ErrorKind::UniqueViolation => {
                RepositoryError::AlreadyExists(format!("{what} ({})", db_err.message()))
            }
            ErrorKind::ForeignKeyViolation
            | ErrorKind::NotNullViolation
            | ErrorKind::CheckViolation => {
                RepositoryError::Constraint(format!("{what} ({})", db_err.message()))
            }
            _ => RepositoryError::Storage(err.to_string()),
        },
        _ => RepositoryError::Storage(err.to_string()),
    }
}
