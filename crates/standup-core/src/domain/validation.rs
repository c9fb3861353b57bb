//! Field validation shared by the domain constructors.

use thiserror::Error;

use crate::utils::slug::is_valid_slug;

/// Construction-time validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    #[error("{field} is too long ({len} characters, maximum {max})")]
    TooLong {
        field: &'static str,
        len: usize,
        max: usize,
    },

    #[error("Invalid slug '{0}': use lowercase letters, digits and single hyphens")]
    InvalidSlug(String),

    #[error("Invalid email address '{0}'")]
    InvalidEmail(String),
}

pub(crate) fn require_text(field: &'static str, value: String) -> Result<String, ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(value)
}

pub(crate) fn require_slug(value: String) -> Result<String, ValidationError> {
    if is_valid_slug(&value) {
        Ok(value)
    } else {
        Err(ValidationError::InvalidSlug(value))
    }
}

pub(crate) fn require_email(value: String) -> Result<String, ValidationError> {
    let valid = matches!(
        value.split_once('@'),
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@')
    );
    if valid {
        Ok(value)
    } else {
        Err(ValidationError::InvalidEmail(value))
    }
}
