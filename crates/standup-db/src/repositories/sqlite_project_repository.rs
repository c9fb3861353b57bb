//! `SQLite` implementation of the `ProjectRepository` trait.

use async_trait::async_trait;

use standup_core::{Project, ProjectRepository, RepositoryError};

use super::row_mappers::{PROJECT_COLUMNS, row_to_project};
use crate::error::map_sqlx_error;
use crate::session::Session;

pub struct SqliteProjectRepository {
    session: Session,
}

impl SqliteProjectRepository {
    pub const fn new(session: Session) -> Self {
        Self { session }
    }
}

#[async_trait]
impl ProjectRepository for SqliteProjectRepository {
    async fn list(&self) -> Result<Vec<Project>, RepositoryError> {
        let rows = sqlx::query(&format!(
            "SELECT {PROJECT_COLUMNS} FROM projects ORDER BY name, id"
        ))
        .fetch_all(self.session.bind())
        .await
        .map_err(|e| map_sqlx_error(e, "projects"))?;

        rows.iter().map(row_to_project).collect()
    }

    async fn get_by_slug(&self, slug: &str) -> Result<Project, RepositoryError> {
        let row = sqlx::query(&format!(
            "SELECT {PROJECT_COLUMNS} FROM projects WHERE slug = ?"
        ))
        .bind(slug)
        .fetch_optional(self.session.bind())
        .await
        .map_err(|e| map_sqlx_error(e, "projects"))?
        .ok_or_else(|| RepositoryError::NotFound(format!("project {slug}")))?;

        row_to_project(&row)
    }

    async fn insert(&self, project: Project) -> Result<Project, RepositoryError> {
        self.session.save(project).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TestDb;

    #[tokio::test]
    async fn lists_by_name() {
        let db = TestDb::new().await.unwrap();
        let repo = db.project_repository();
        repo.insert(Project::new("Zeta", "zeta").unwrap()).await.unwrap();
        repo.insert(Project::new("Alpha", "alpha").unwrap()).await.unwrap();

        let slugs: Vec<String> = repo.list().await.unwrap().into_iter().map(|p| p.slug).collect();
        assert_eq!(slugs, vec!["alpha", "zeta"]);
    }

    #[tokio::test]
    async fn get_by_slug_round_trips() {
        let db = TestDb::new().await.unwrap();
        let repo = db.project_repository();
        let saved = repo
            .insert(Project::new("Test Project", "test-project").unwrap())
            .await
            .unwrap();

        assert_eq!(repo.get_by_slug("test-project").await.unwrap(), saved);
        assert!(matches!(
            repo.get_by_slug("missing").await,
            Err(RepositoryError::NotFound(_))
        ));
    }
}
