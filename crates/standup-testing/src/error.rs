//! Fixture error type.

use thiserror::Error;

use standup_core::{RepositoryError, ValidationError};
use standup_db::SchemaError;

/// Everything that can fail while setting up, using or tearing down a fixture.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// Creating or dropping the schema failed.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// Persisting a factory object failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Factory defaults plus overrides did not form a valid entity.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The application could not be created.
    #[error(transparent)]
    App(#[from] anyhow::Error),

    /// `count_rows` was asked about a table no installed app declares.
    #[error("unknown table '{0}'")]
    UnknownTable(String),

    /// A simulated request could not be built or its body not read.
    #[error("request failed: {0}")]
    Http(String),

    /// A response body was not the expected JSON.
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}
