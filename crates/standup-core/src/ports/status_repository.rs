//! Status repository trait definition.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::Status;

/// Repository for status update persistence operations.
///
/// Loaded statuses carry their user and project as objects. Every list
/// method returns newest first.
#[async_trait]
pub trait StatusRepository: Send + Sync {
    /// The most recent statuses across all projects.
    async fn list_recent(&self, limit: u32) -> Result<Vec<Status>, RepositoryError>;

    /// The most recent statuses posted by one user.
    async fn list_for_user(&self, user_id: i64, limit: u32)
    -> Result<Vec<Status>, RepositoryError>;

    /// The most recent statuses posted against one project.
    async fn list_for_project(
        &self,
        project_id: i64,
        limit: u32,
    ) -> Result<Vec<Status>, RepositoryError>;

    /// Get a status by its database ID.
    async fn get_by_id(&self, id: i64) -> Result<Status, RepositoryError>;

    /// Insert a new status and return it with its assigned ID and timestamp.
    ///
    /// Unsaved related objects are inserted first.
    async fn insert(&self, status: Status) -> Result<Status, RepositoryError>;

    /// Delete a status by its database ID.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if it doesn't exist.
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}
