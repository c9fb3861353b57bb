//! Composition utilities for building repositories with `SQLite` backends.
//!
//! Construction only; no domain logic lives here.

use std::sync::Arc;

use standup_core::Repos;

use crate::repositories::{SqliteProjectRepository, SqliteStatusRepository, SqliteUserRepository};
use crate::session::Session;

/// Factory for creating repository instances with `SQLite` backends.
pub struct CoreFactory;

impl CoreFactory {
    /// Build all `SQLite` repositories on top of one session.
    pub fn build_repos(session: &Session) -> Repos {
        Repos::new(
            Arc::new(SqliteProjectRepository::new(session.clone())),
            Arc::new(SqliteUserRepository::new(session.clone())),
            Arc::new(SqliteStatusRepository::new(session.clone())),
        )
    }
}

/// Test database helper for repository tests.
///
/// A private in-memory database with the default apps' schema applied.
#[cfg(any(test, feature = "test-utils"))]
pub struct TestDb {
    session: Session,
}

#[cfg(any(test, feature = "test-utils"))]
impl TestDb {
    /// Create a new in-memory test database with full schema.
    pub async fn new() -> anyhow::Result<Self> {
        let pool = crate::setup::setup_test_database().await?;
        Ok(Self {
            session: Session::new(pool),
        })
    }

    pub const fn session(&self) -> &Session {
        &self.session
    }

    pub fn project_repository(&self) -> SqliteProjectRepository {
        SqliteProjectRepository::new(self.session.clone())
    }

    pub fn user_repository(&self) -> SqliteUserRepository {
        SqliteUserRepository::new(self.session.clone())
    }

    pub fn status_repository(&self) -> SqliteStatusRepository {
        SqliteStatusRepository::new(self.session.clone())
    }

    pub fn repos(&self) -> Repos {
        CoreFactory::build_repos(&self.session)
    }
}
