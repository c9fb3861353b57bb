//! User domain type.

use serde::{Deserialize, Serialize};

use super::Entity;
use super::validation::{ValidationError, require_email, require_slug, require_text};

/// A team member who posts status updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Option<i64>,
    pub username: String,
    pub name: String,
    pub email: String,
    pub slug: String,
}

impl User {
    /// Build an unsaved user.
    pub fn new(
        username: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        slug: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id: None,
            username: require_text("username", username.into())?,
            name: require_text("name", name.into())?,
            email: require_email(email.into())?,
            slug: require_slug(slug.into())?,
        })
    }
}

impl Entity for User {
    fn id(&self) -> Option<i64> {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_every_field() {
        assert!(User::new("jdoe", "John Doe", "john@doe.com", "jdoe").is_ok());
        assert_eq!(
            User::new("", "John Doe", "john@doe.com", "jdoe").unwrap_err(),
            ValidationError::Empty { field: "username" }
        );
        assert_eq!(
            User::new("jdoe", "John Doe", "nope", "jdoe").unwrap_err(),
            ValidationError::InvalidEmail("nope".into())
        );
    }
}
