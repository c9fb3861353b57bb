//! Project domain type.

use serde::{Deserialize, Serialize};

use super::Entity;
use super::validation::{ValidationError, require_slug, require_text};

/// A project that status updates are posted against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: Option<i64>,
    pub name: String,
    pub slug: String,
}

impl Project {
    /// Build an unsaved project.
    pub fn new(name: impl Into<String>, slug: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            id: None,
            name: require_text("name", name.into())?,
            slug: require_slug(slug.into())?,
        })
    }
}

impl Entity for Project {
    fn id(&self) -> Option<i64> {
        self.id
    }
}
