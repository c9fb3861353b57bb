//! `SQLite` implementation of the `UserRepository` trait.

use async_trait::async_trait;

use standup_core::{RepositoryError, User, UserRepository};

use super::row_mappers::{USER_COLUMNS, row_to_user};
use crate::error::map_sqlx_error;
use crate::session::Session;

pub struct SqliteUserRepository {
    session: Session,
}

impl SqliteUserRepository {
    pub const fn new(session: Session) -> Self {
        Self { session }
    }

    async fn get_where(&self, column: &str, value: &str) -> Result<User, RepositoryError> {
        let row = sqlx::query(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE {column} = ?"
        ))
        .bind(value)
        .fetch_optional(self.session.bind())
        .await
        .map_err(|e| map_sqlx_error(e, "users"))?
        .ok_or_else(|| RepositoryError::NotFound(format!("user {value}")))?;

        row_to_user(&row)
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn list(&self) -> Result<Vec<User>, RepositoryError> {
        let rows = sqlx::query(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY username"
        ))
        .fetch_all(self.session.bind())
        .await
        .map_err(|e| map_sqlx_error(e, "users"))?;

        rows.iter().map(row_to_user).collect()
    }

    async fn get_by_slug(&self, slug: &str) -> Result<User, RepositoryError> {
        self.get_where("slug", slug).await
    }

    async fn get_by_username(&self, username: &str) -> Result<User, RepositoryError> {
        self.get_where("username", username).await
    }

    async fn insert(&self, user: User) -> Result<User, RepositoryError> {
        self.session.save(user).await
    }
}
