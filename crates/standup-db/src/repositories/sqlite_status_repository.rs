//! `SQLite` implementation of the `StatusRepository` trait.

use async_trait::async_trait;

use standup_core::{RepositoryError, Status, StatusRepository};

use super::row_mappers::{STATUS_SELECT, row_to_status};
use crate::error::map_sqlx_error;
use crate::session::Session;

pub struct SqliteStatusRepository {
    session: Session,
}

impl SqliteStatusRepository {
    pub const fn new(session: Session) -> Self {
        Self { session }
    }
}

#[async_trait]
impl StatusRepository for SqliteStatusRepository {
    async fn list_recent(&self, limit: u32) -> Result<Vec<Status>, RepositoryError> {
        let rows = sqlx::query(&format!("{STATUS_SELECT} ORDER BY s.id DESC LIMIT ?"))
            .bind(i64::from(limit))
            .fetch_all(self.session.bind())
            .await
            .map_err(|e| map_sqlx_error(e, "statuses"))?;

        rows.iter().map(row_to_status).collect()
    }

    async fn list_for_user(
        &self,
        user_id: i64,
        limit: u32,
    ) -> Result<Vec<Status>, RepositoryError> {
        let rows = sqlx::query(&format!(
            "{STATUS_SELECT} WHERE s.user_id = ? ORDER BY s.id DESC LIMIT ?"
        ))
        .bind(user_id)
        .bind(i64::from(limit))
        .fetch_all(self.session.bind())
        .await
        .map_err(|e| map_sqlx_error(e, "statuses"))?;

        rows.iter().map(row_to_status).collect()
    }

    async fn list_for_project(
        &self,
        project_id: i64,
        limit: u32,
    ) -> Result<Vec<Status>, RepositoryError> {
        let rows = sqlx::query(&format!(
            "{STATUS_SELECT} WHERE s.project_id = ? ORDER BY s.id DESC LIMIT ?"
        ))
        .bind(project_id)
        .bind(i64::from(limit))
        .fetch_all(self.session.bind())
        .await
        .map_err(|e| map_sqlx_error(e, "statuses"))?;

        rows.iter().map(row_to_status).collect()
    }

    async fn get_by_id(&self, id: i64) -> Result<Status, RepositoryError> {
        let row = sqlx::query(&format!("{STATUS_SELECT} WHERE s.id = ?"))
            .bind(id)
            .fetch_optional(self.session.bind())
            .await
            .map_err(|e| map_sqlx_error(e, "statuses"))?
            .ok_or_else(|| RepositoryError::NotFound(format!("status {id}")))?;

        row_to_status(&row)
    }

    async fn insert(&self, status: Status) -> Result<Status, RepositoryError> {
        self.session.save(status).await
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM statuses WHERE id = ?")
            .bind(id)
            .execute(self.session.bind())
            .await
            .map_err(|e| map_sqlx_error(e, "statuses"))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("status {id}")));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TestDb;
    use standup_core::{Project, Related, User};

    async fn seeded() -> (TestDb, User, Project) {
        let db = TestDb::new().await.unwrap();
        let user = db
            .session()
            .save(User::new("jdoe", "John Doe", "john@doe.com", "jdoe").unwrap())
            .await
            .unwrap();
        let project = db
            .session()
            .save(Project::new("Test Project", "test-project").unwrap())
            .await
            .unwrap();
        (db, user, project)
    }

    fn status(content: &str, user: &User, project: &Project) -> Status {
        Status::new(
            content,
            Related::Id(user.id.unwrap()),
            Related::Id(project.id.unwrap()),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn loads_relations_with_the_status() {
        let (db, user, project) = seeded().await;
        let repo = db.status_repository();
        let saved = repo.insert(status("First", &user, &project)).await.unwrap();

        let loaded = repo.get_by_id(saved.id.unwrap()).await.unwrap();
        assert_eq!(loaded.content, "First");
        assert_eq!(loaded.user.object(), Some(&user));
        assert_eq!(loaded.project.object(), Some(&project));
        assert!(loaded.created_at.is_some());
    }

    #[tokio::test]
    async fn timelines_are_newest_first_and_limited() {
        let (db, user, project) = seeded().await;
        let other = db
            .session()
            .save(Project::new("Other", "other").unwrap())
            .await
            .unwrap();
        let repo = db.status_repository();
        for content in ["one", "two", "three"] {
            repo.insert(status(content, &user, &project)).await.unwrap();
        }
        repo.insert(status("elsewhere", &user, &other)).await.unwrap();

        let recent: Vec<String> = repo
            .list_recent(2)
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.content)
            .collect();
        assert_eq!(recent, vec!["elsewhere", "three"]);

        let for_project = repo.list_for_project(project.id.unwrap(), 10).await.unwrap();
        assert_eq!(for_project.len(), 3);
        assert_eq!(for_project[0].content, "three");

        let for_user = repo.list_for_user(user.id.unwrap(), 10).await.unwrap();
        assert_eq!(for_user.len(), 4);
    }

    #[tokio::test]
    async fn delete_reports_missing_rows() {
        let (db, user, project) = seeded().await;
        let repo = db.status_repository();
        let saved = repo.insert(status("Bye", &user, &project)).await.unwrap();
        let id = saved.id.unwrap();

        repo.delete(id).await.unwrap();
        assert!(matches!(repo.delete(id).await, Err(RepositoryError::NotFound(_))));
        assert!(matches!(repo.get_by_id(id).await, Err(RepositoryError::NotFound(_))));
    }
}
