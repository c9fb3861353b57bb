//! Axum web adapter for Standup.
//!
//! [`create_app`] is the composition root: it connects the database, builds
//! the repositories and services, and assembles the router. The `standup`
//! binary wraps it with CLI flags, logging and a TCP listener.
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

#[cfg(test)]
use http_body_util as _;
#[cfg(test)]
use serde_json as _;
#[cfg(test)]
use tempfile as _;
#[cfg(test)]
use tower as _;

// Used by main.rs binary
use clap as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod routes;
pub mod state;

// Re-export primary types
pub use bootstrap::{App, AppContext, create_app, serve};
pub use error::HttpError;
pub use routes::create_router;
pub use state::AppState;
