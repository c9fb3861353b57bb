//! Domain types for Standup.
//!
//! These types represent projects, users and status updates independent
//! of any infrastructure concerns. Construction validates every field, so a
//! value of these types is always well-formed; persistence is a separate,
//! explicit step that fills in the `id`.

mod project;
mod related;
mod status;
mod user;
mod validation;

pub use project::Project;
pub use related::Related;
pub use status::{MAX_STATUS_LENGTH, Status};
pub use user::User;
pub use validation::ValidationError;

/// Common behaviour of persisted entities.
pub trait Entity {
    /// Database identifier, `None` until the entity has been saved.
    fn id(&self) -> Option<i64>;

    /// Whether the entity has been saved.
    fn is_persisted(&self) -> bool {
        self.id().is_some()
    }
}
