//! User repository trait definition.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::User;

/// Repository for user persistence operations.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// List all users ordered by username.
    async fn list(&self) -> Result<Vec<User>, RepositoryError>;

    /// Get a user by slug.
    async fn get_by_slug(&self, slug: &str) -> Result<User, RepositoryError>;

    /// Get a user by username.
    async fn get_by_username(&self, username: &str) -> Result<User, RepositoryError>;

    /// Insert a new user and return it with its assigned ID.
    ///
    /// Returns `Err(RepositoryError::AlreadyExists)` if the username or slug
    /// is taken.
    async fn insert(&self, user: User) -> Result<User, RepositoryError>;
}
