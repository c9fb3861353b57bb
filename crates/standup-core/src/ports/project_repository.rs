//! Project repository trait definition.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::Project;

/// Repository for project persistence operations.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// List all projects ordered by name.
    async fn list(&self) -> Result<Vec<Project>, RepositoryError>;

    /// Get a project by its slug.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if no project has that slug.
    async fn get_by_slug(&self, slug: &str) -> Result<Project, RepositoryError>;

    /// Insert a new project and return it with its assigned ID.
    ///
    /// Returns `Err(RepositoryError::AlreadyExists)` if the slug is taken.
    async fn insert(&self, project: Project) -> Result<Project, RepositoryError>;
}
