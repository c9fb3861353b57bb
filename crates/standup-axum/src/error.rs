//! Axum-specific error types and mappings.
//!
//! This module provides the adapter's error type and the mappings from
//! core errors to HTTP status codes and response bodies.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use standup_core::{CoreError, RepositoryError, ValidationError};

/// Message sent in place of internal error detail outside testing mode.
pub const REDACTED_MESSAGE: &str = "Internal server error";

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request (invalid input).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Conflict (resource already exists).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error response body.
#[derive(Debug, Serialize)]
pub(crate) struct ErrorBody {
    pub error: String,
    pub status: u16,
}

impl ErrorBody {
    pub(crate) fn response(status: StatusCode, error: String) -> Response {
        let body = Self {
            error,
            status: status.as_u16(),
        };
        (status, Json(body)).into_response()
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::Conflict(msg) => (StatusCode::CONFLICT, msg),
            Self::Internal(msg) => {
                tracing::error!(target: "standup.http", error = %msg, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        ErrorBody::response(status, message)
    }
}

impl From<CoreError> for HttpError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Repository(repo_err) => repo_err.into(),
            CoreError::Validation(validation_err) => validation_err.into(),
        }
    }
}

impl From<RepositoryError> for HttpError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(msg) => Self::NotFound(msg),
            RepositoryError::AlreadyExists(msg) => Self::Conflict(msg),
            RepositoryError::Constraint(msg) => Self::BadRequest(msg),
            RepositoryError::Storage(msg) => Self::Internal(format!("Storage: {msg}")),
        }
    }
}

impl From<ValidationError> for HttpError {
    fn from(err: ValidationError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repository_errors_map_to_status_codes() {
        let cases = [
            (RepositoryError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (RepositoryError::AlreadyExists("x".into()), StatusCode::CONFLICT),
            (RepositoryError::Constraint("x".into()), StatusCode::BAD_REQUEST),
            (
                RepositoryError::Storage("x".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, expected) in cases {
            let response = HttpError::from(err).into_response();
            assert_eq!(response.status(), expected);
        }
    }

    #[test]
    fn validation_errors_are_bad_requests() {
        let err = CoreError::Validation(ValidationError::InvalidSlug("Bad Slug".into()));
        assert!(matches!(HttpError::from(err), HttpError::BadRequest(_)));
    }
}
