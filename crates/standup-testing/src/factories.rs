//! Entity factories.
//!
//! Each factory starts from fixed defaults, applies the overrides set on
//! it, validates the result and, when `save(true)` was requested, commits
//! it through the session before returning. Every save is its own unit of
//! work.
//!
//! A status needs a user and a project. Whichever of the two was not given
//! (neither as an object nor as an ID) is created with its own factory and
//! saved first, whether or not the status itself is saved.

use standup_core::{Project, Related, Status, User};
use standup_db::{Persist, Session};

use crate::error::FixtureError;

pub const DEFAULT_PROJECT_NAME: &str = "Test Project";
pub const DEFAULT_PROJECT_SLUG: &str = "test-project";

pub const DEFAULT_USERNAME: &str = "jdoe";
pub const DEFAULT_USER_NAME: &str = "John Doe";
pub const DEFAULT_USER_EMAIL: &str = "john@doe.com";
pub const DEFAULT_USER_SLUG: &str = "jdoe";

pub const DEFAULT_STATUS_CONTENT: &str = "This is a status update.";

/// Persist `entity` when `save` is set, otherwise hand it back untouched.
pub(crate) async fn with_save<E: Persist>(
    session: &Session,
    entity: E,
    save: bool,
) -> Result<E, FixtureError> {
    if !save {
        return Ok(entity);
    }
    let entity = session.save(entity).await?;
    tracing::debug!(target: "standup.testing", id = ?entity.id(), "Saved factory object");
    Ok(entity)
}

/// Builds a [`Project`].
#[must_use]
pub struct ProjectFactory<'a> {
    session: &'a Session,
    name: Option<String>,
    slug: Option<String>,
    save: bool,
}

impl<'a> ProjectFactory<'a> {
    pub const fn new(session: &'a Session) -> Self {
        Self {
            session,
            name: None,
            slug: None,
            save: false,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub const fn save(mut self, save: bool) -> Self {
        self.save = save;
        self
    }

    pub async fn build(self) -> Result<Project, FixtureError> {
        let project = Project::new(
            self.name.unwrap_or_else(|| DEFAULT_PROJECT_NAME.to_string()),
            self.slug.unwrap_or_else(|| DEFAULT_PROJECT_SLUG.to_string()),
        )?;
        with_save(self.session, project, self.save).await
    }
}

/// Builds a [`User`].
#[must_use]
pub struct UserFactory<'a> {
    session: &'a Session,
    username: Option<String>,
    name: Option<String>,
    email: Option<String>,
    slug: Option<String>,
    save: bool,
}

impl<'a> UserFactory<'a> {
    pub const fn new(session: &'a Session) -> Self {
        Self {
            session,
            username: None,
            name: None,
            email: None,
            slug: None,
            save: false,
        }
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub const fn save(mut self, save: bool) -> Self {
        self.save = save;
        self
    }

    pub async fn build(self) -> Result<User, FixtureError> {
        let user = User::new(
            self.username.unwrap_or_else(|| DEFAULT_USERNAME.to_string()),
            self.name.unwrap_or_else(|| DEFAULT_USER_NAME.to_string()),
            self.email.unwrap_or_else(|| DEFAULT_USER_EMAIL.to_string()),
            self.slug.unwrap_or_else(|| DEFAULT_USER_SLUG.to_string()),
        )?;
        with_save(self.session, user, self.save).await
    }
}

/// Builds a [`Status`].
///
/// `user`/`user_id` (and `project`/`project_id`) set the same relationship;
/// the last one called wins.
#[must_use]
pub struct StatusFactory<'a> {
    session: &'a Session,
    content: Option<String>,
    user: Option<Related<User>>,
    project: Option<Related<Project>>,
    save: bool,
}

impl<'a> StatusFactory<'a> {
    pub const fn new(session: &'a Session) -> Self {
        Self {
            session,
            content: None,
            user: None,
            project: None,
            save: false,
        }
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Attach a user object. An unsaved user is saved along with the status.
    pub fn user(mut self, user: User) -> Self {
        self.user = Some(Related::Object(user));
        self
    }

    pub fn user_id(mut self, id: i64) -> Self {
        self.user = Some(Related::Id(id));
        self
    }

    /// Attach a project object. An unsaved project is saved along with the
    /// status.
    pub fn project(mut self, project: Project) -> Self {
        self.project = Some(Related::Object(project));
        self
    }

    pub fn project_id(mut self, id: i64) -> Self {
        self.project = Some(Related::Id(id));
        self
    }

    pub const fn save(mut self, save: bool) -> Self {
        self.save = save;
        self
    }

    pub async fn build(self) -> Result<Status, FixtureError> {
        let user = match self.user {
            Some(user) => user,
            None => Related::Object(UserFactory::new(self.session).save(true).build().await?),
        };
        let project = match self.project {
            Some(project) => project,
            None => Related::Object(
                ProjectFactory::new(self.session)
                    .save(true)
                    .build()
                    .await?,
            ),
        };

        let status = Status::new(
            self.content
                .unwrap_or_else(|| DEFAULT_STATUS_CONTENT.to_string()),
            user,
            project,
        )?;
        with_save(self.session, status, self.save).await
    }
}
