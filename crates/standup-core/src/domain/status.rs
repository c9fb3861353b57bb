//! Status update domain type.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::validation::{ValidationError, require_text};
use super::{Entity, Project, Related, User};

/// Longest status update accepted, in characters.
pub const MAX_STATUS_LENGTH: usize = 1000;

/// A status update posted by a user against a project.
///
/// Both relationships are mandatory: a `Status` cannot be built without
/// a user and a project, either as objects or as identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Status {
    pub id: Option<i64>,
    pub content: String,
    pub user: Related<User>,
    pub project: Related<Project>,
    pub created_at: Option<DateTime<Utc>>,
}

impl Status {
    /// Build an unsaved status update.
    pub fn new(
        content: impl Into<String>,
        user: Related<User>,
        project: Related<Project>,
    ) -> Result<Self, ValidationError> {
        let content = require_text("content", content.into())?;
        let len = content.chars().count();
        if len > MAX_STATUS_LENGTH {
            return Err(ValidationError::TooLong {
                field: "content",
                len,
                max: MAX_STATUS_LENGTH,
            });
        }

        Ok(Self {
            id: None,
            content,
            user,
            project,
            created_at: None,
        })
    }

    pub fn user_id(&self) -> Option<i64> {
        self.user.id()
    }

    pub fn project_id(&self) -> Option<i64> {
        self.project.id()
    }
}

impl Entity for Status {
    fn id(&self) -> Option<i64> {
        self.id
    }
}

impl From<User> for Related<User> {
    fn from(user: User) -> Self {
        Self::Object(user)
    }
}

impl From<Project> for Related<Project> {
    fn from(project: Project) -> Self {
        Self::Object(project)
    }
}
