//! HTTP request handlers for the Axum web server.
//!
//! Each submodule contains handlers for a specific API area.
//! Handlers are thin wrappers that delegate to `AppCore`.

pub mod projects;
pub mod statuses;
pub mod users;

use serde::Deserialize;

/// Query string accepted by every timeline endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct TimelineQuery {
    /// Maximum number of statuses to return; clamped by the service.
    pub limit: Option<u32>,
}
