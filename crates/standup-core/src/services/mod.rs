//! Core services.
//!
//! Thin orchestration over the repository ports. Adapters reach them
//! through [`AppCore`].

mod app_core;
mod project_service;
mod status_service;
mod user_service;

pub use app_core::AppCore;
pub use project_service::ProjectService;
pub use status_service::{DEFAULT_TIMELINE_LIMIT, MAX_TIMELINE_LIMIT, StatusService};
pub use user_service::UserService;
