//! User service.

use std::sync::Arc;

use crate::domain::User;
use crate::ports::{CoreError, RepositoryError, UserRepository};
use crate::utils::slug::slugify;

/// Service for managing users.
pub struct UserService {
    repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    /// List all users ordered by username.
    pub async fn list(&self) -> Result<Vec<User>, RepositoryError> {
        self.repo.list().await
    }

    /// Get a user by slug.
    pub async fn get(&self, slug: &str) -> Result<User, RepositoryError> {
        self.repo.get_by_slug(slug).await
    }

    /// Create a user. The slug is derived from the username when omitted.
    pub async fn create(
        &self,
        username: String,
        name: String,
        email: String,
        slug: Option<String>,
    ) -> Result<User, CoreError> {
        let slug = slug.unwrap_or_else(|| slugify(&username));
        let user = User::new(username, name, email, slug)?;
        let user = self.repo.insert(user).await?;
        tracing::info!(target: "standup.users", username = %user.username, "Created user");
        Ok(user)
    }
}
