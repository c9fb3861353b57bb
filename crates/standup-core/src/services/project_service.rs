//! Project service.

use std::sync::Arc;

use crate::domain::Project;
use crate::ports::{CoreError, ProjectRepository, RepositoryError};
use crate::utils::slug::slugify;

/// Service for managing projects.
pub struct ProjectService {
    repo: Arc<dyn ProjectRepository>,
}

impl ProjectService {
    pub fn new(repo: Arc<dyn ProjectRepository>) -> Self {
        Self { repo }
    }

    /// List all projects ordered by name.
    pub async fn list(&self) -> Result<Vec<Project>, RepositoryError> {
        self.repo.list().await
    }

    /// Get a project by slug.
    pub async fn get(&self, slug: &str) -> Result<Project, RepositoryError> {
        self.repo.get_by_slug(slug).await
    }

    /// Create a project. The slug is derived from the name when omitted.
    pub async fn create(&self, name: String, slug: Option<String>) -> Result<Project, CoreError> {
        let slug = slug.unwrap_or_else(|| slugify(&name));
        let project = Project::new(name, slug)?;
        let project = self.repo.insert(project).await?;
        tracing::info!(target: "standup.projects", slug = %project.slug, "Created project");
        Ok(project)
    }
}
