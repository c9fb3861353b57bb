//! Port definitions (trait abstractions) for persistence.
//!
//! Ports define the interfaces that the core domain expects from
//! infrastructure. They contain no implementation details and use only
//! domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` types in any signature
//! - Traits are minimal and lookup/insert focused
//! - Timeline ordering and limits belong to the services

pub mod project_repository;
pub mod status_repository;
pub mod user_repository;

use std::sync::Arc;
use thiserror::Error;

pub use project_repository::ProjectRepository;
pub use status_repository::StatusRepository;
pub use user_repository::UserRepository;

use crate::domain::ValidationError;

/// Container for all repository trait objects.
///
/// Lives in `standup-core` so that `AppCore` can accept it without
/// depending on `standup-db`.
#[derive(Clone)]
pub struct Repos {
    pub projects: Arc<dyn ProjectRepository>,
    pub users: Arc<dyn UserRepository>,
    pub statuses: Arc<dyn StatusRepository>,
}

impl Repos {
    /// Create a new Repos container.
    pub fn new(
        projects: Arc<dyn ProjectRepository>,
        users: Arc<dyn UserRepository>,
        statuses: Arc<dyn StatusRepository>,
    ) -> Self {
        Self {
            projects,
            users,
            statuses,
        }
    }
}

/// Domain-specific errors for repository operations.
///
/// This error type abstracts away storage implementation details (e.g., sqlx
/// errors) and provides a clean interface for services to handle storage
/// failures.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested entity was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// An entity with the same unique key already exists.
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// A constraint was violated (e.g., foreign key).
    #[error("Constraint violation: {0}")]
    Constraint(String),

    /// Storage backend error (connection, missing table, commit failure).
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Core error type for semantic domain errors.
///
/// Adapters map this to their own error types (HTTP status codes, test
/// fixture errors).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Input failed domain validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
