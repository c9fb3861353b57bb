//! Status service - posting updates and reading timelines.

use std::sync::Arc;

use crate::domain::{Related, Status};
use crate::ports::{CoreError, ProjectRepository, RepositoryError, StatusRepository, UserRepository};

/// Timeline length used when the caller does not ask for one.
pub const DEFAULT_TIMELINE_LIMIT: u32 = 20;

/// Longest timeline served in one request.
pub const MAX_TIMELINE_LIMIT: u32 = 100;

/// Service for status updates.
pub struct StatusService {
    statuses: Arc<dyn StatusRepository>,
    users: Arc<dyn UserRepository>,
    projects: Arc<dyn ProjectRepository>,
}

impl StatusService {
    pub fn new(
        statuses: Arc<dyn StatusRepository>,
        users: Arc<dyn UserRepository>,
        projects: Arc<dyn ProjectRepository>,
    ) -> Self {
        Self {
            statuses,
            users,
            projects,
        }
    }

    /// Clamp a requested timeline length into `1..=MAX_TIMELINE_LIMIT`.
    pub fn effective_limit(limit: Option<u32>) -> u32 {
        limit
            .unwrap_or(DEFAULT_TIMELINE_LIMIT)
            .clamp(1, MAX_TIMELINE_LIMIT)
    }

    /// Newest statuses across every project.
    pub async fn timeline(&self, limit: Option<u32>) -> Result<Vec<Status>, RepositoryError> {
        self.statuses
            .list_recent(Self::effective_limit(limit))
            .await
    }

    /// Newest statuses posted by the user with `slug`.
    pub async fn for_user(
        &self,
        slug: &str,
        limit: Option<u32>,
    ) -> Result<Vec<Status>, RepositoryError> {
        let user = self.users.get_by_slug(slug).await?;
        let user_id = user
            .id
            .ok_or_else(|| RepositoryError::NotFound(format!("user {slug}")))?;
        self.statuses
            .list_for_user(user_id, Self::effective_limit(limit))
            .await
    }

    /// Newest statuses posted against the project with `slug`.
    pub async fn for_project(
        &self,
        slug: &str,
        limit: Option<u32>,
    ) -> Result<Vec<Status>, RepositoryError> {
        let project = self.projects.get_by_slug(slug).await?;
        let project_id = project
            .id
            .ok_or_else(|| RepositoryError::NotFound(format!("project {slug}")))?;
        self.statuses
            .list_for_project(project_id, Self::effective_limit(limit))
            .await
    }

    /// Get one status by ID.
    pub async fn get(&self, id: i64) -> Result<Status, RepositoryError> {
        self.statuses.get_by_id(id).await
    }

    /// Post a status as `user_slug` against `project_slug`.
    ///
    /// Both the user and the project must already exist.
    pub async fn post(
        &self,
        user_slug: &str,
        project_slug: &str,
        content: String,
    ) -> Result<Status, CoreError> {
        let user = self.users.get_by_slug(user_slug).await?;
        let project = self.projects.get_by_slug(project_slug).await?;
        let status = Status::new(content, Related::Object(user), Related::Object(project))?;
        let status = self.statuses.insert(status).await?;
        tracing::debug!(
            target: "standup.statuses",
            id = ?status.id,
            user = %user_slug,
            project = %project_slug,
            "Posted status"
        );
        Ok(status)
    }

    /// Delete a status by ID.
    pub async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        self.statuses.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Project, User};
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct FixedUsers;

    #[async_trait]
    impl UserRepository for FixedUsers {
        async fn list(&self) -> Result<Vec<User>, RepositoryError> {
            Ok(vec![])
        }
        async fn get_by_slug(&self, slug: &str) -> Result<User, RepositoryError> {
            if slug == "jdoe" {
                let mut user = User::new("jdoe", "John Doe", "john@doe.com", "jdoe").unwrap();
                user.id = Some(1);
                Ok(user)
            } else {
                Err(RepositoryError::NotFound(format!("user {slug}")))
            }
        }
        async fn get_by_username(&self, username: &str) -> Result<User, RepositoryError> {
            self.get_by_slug(username).await
        }
        async fn insert(&self, _user: User) -> Result<User, RepositoryError> {
            Err(RepositoryError::Storage("read-only test double".to_string()))
        }
    }

    struct FixedProjects;

    #[async_trait]
    impl ProjectRepository for FixedProjects {
        async fn list(&self) -> Result<Vec<Project>, RepositoryError> {
            Ok(vec![])
        }
        async fn get_by_slug(&self, slug: &str) -> Result<Project, RepositoryError> {
            if slug == "test-project" {
                let mut project = Project::new("Test Project", "test-project").unwrap();
                project.id = Some(2);
                Ok(project)
            } else {
                Err(RepositoryError::NotFound(format!("project {slug}")))
            }
        }
        async fn insert(&self, _project: Project) -> Result<Project, RepositoryError> {
            Err(RepositoryError::Storage("read-only test double".to_string()))
        }
    }

    #[derive(Default)]
    struct RecordingStatuses {
        inserted: Mutex<Vec<Status>>,
        limits: Mutex<Vec<u32>>,
    }

    #[async_trait]
    impl StatusRepository for RecordingStatuses {
        async fn list_recent(&self, limit: u32) -> Result<Vec<Status>, RepositoryError> {
            self.limits.lock().unwrap().push(limit);
            Ok(vec![])
        }
        async fn list_for_user(
            &self,
            _user_id: i64,
            limit: u32,
        ) -> Result<Vec<Status>, RepositoryError> {
            self.limits.lock().unwrap().push(limit);
            Ok(vec![])
        }
        async fn list_for_project(
            &self,
            _project_id: i64,
            limit: u32,
        ) -> Result<Vec<Status>, RepositoryError> {
            self.limits.lock().unwrap().push(limit);
            Ok(vec![])
        }
        async fn get_by_id(&self, id: i64) -> Result<Status, RepositoryError> {
            Err(RepositoryError::NotFound(format!("status {id}")))
        }
        async fn insert(&self, mut status: Status) -> Result<Status, RepositoryError> {
            status.id = Some(10);
            self.inserted.lock().unwrap().push(status.clone());
            Ok(status)
        }
        async fn delete(&self, _id: i64) -> Result<(), RepositoryError> {
            Ok(())
        }
    }

    fn service(statuses: Arc<RecordingStatuses>) -> StatusService {
        StatusService::new(statuses, Arc::new(FixedUsers), Arc::new(FixedProjects))
    }

    #[test]
    fn limits_are_clamped() {
        assert_eq!(StatusService::effective_limit(None), DEFAULT_TIMELINE_LIMIT);
        assert_eq!(StatusService::effective_limit(Some(0)), 1);
        assert_eq!(StatusService::effective_limit(Some(5)), 5);
        assert_eq!(StatusService::effective_limit(Some(10_000)), MAX_TIMELINE_LIMIT);
    }

    #[tokio::test]
    async fn post_resolves_both_slugs() {
        let statuses = Arc::new(RecordingStatuses::default());
        let status = service(statuses.clone())
            .post("jdoe", "test-project", "Done with the release.".into())
            .await
            .unwrap();

        assert_eq!(status.id, Some(10));
        assert_eq!(status.user_id(), Some(1));
        assert_eq!(status.project_id(), Some(2));
        assert_eq!(statuses.inserted.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn post_with_unknown_project_inserts_nothing() {
        let statuses = Arc::new(RecordingStatuses::default());
        let err = service(statuses.clone())
            .post("jdoe", "nope", "Hello".into())
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::Repository(RepositoryError::NotFound(_))));
        assert!(statuses.inserted.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn post_validates_content() {
        let statuses = Arc::new(RecordingStatuses::default());
        let err = service(statuses)
            .post("jdoe", "test-project", "   ".into())
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[tokio::test]
    async fn timelines_pass_clamped_limits() {
        let statuses = Arc::new(RecordingStatuses::default());
        let service = service(statuses.clone());
        service.timeline(None).await.unwrap();
        service.for_user("jdoe", Some(500)).await.unwrap();
        service.for_project("test-project", Some(3)).await.unwrap();

        assert_eq!(
            *statuses.limits.lock().unwrap(),
            vec![DEFAULT_TIMELINE_LIMIT, MAX_TIMELINE_LIMIT, 3]
        );
    }
}
