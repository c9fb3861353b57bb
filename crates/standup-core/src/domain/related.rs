//! Relationship holder for foreign keys.

use serde::Serialize;

use super::Entity;

/// One side of a mandatory relationship.
///
/// A relationship is either a bare foreign-key identifier or the related
/// object itself. A related object that has not been saved yet has no
/// identifier; saving the owner saves it first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Related<T> {
    Id(i64),
    Object(T),
}

impl<T: Entity> Related<T> {
    /// The foreign-key value, if it is known yet.
    pub fn id(&self) -> Option<i64> {
        match self {
            Self::Id(id) => Some(*id),
            Self::Object(object) => object.id(),
        }
    }

    /// The related object, when it was supplied or loaded.
    pub const fn object(&self) -> Option<&T> {
        match self {
            Self::Id(_) => None,
            Self::Object(object) => Some(object),
        }
    }
}
