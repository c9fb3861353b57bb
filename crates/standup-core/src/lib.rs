//! Core domain types, configuration and port definitions for Standup.
//!
//! This crate has no knowledge of SQL or HTTP. Adapters (`standup-db`,
//! `standup-axum`) depend on it and implement or consume its ports.
#![deny(unused_crate_dependencies)]

pub mod config;
pub mod domain;
pub mod ports;
pub mod services;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::{AppConfig, ConfigError, DEFAULT_INSTALLED_APPS};
pub use domain::{Entity, Project, Related, Status, User, ValidationError};
pub use ports::{
    CoreError, ProjectRepository, Repos, RepositoryError, StatusRepository, UserRepository,
};
pub use services::{AppCore, ProjectService, StatusService, UserService};
pub use utils::slug::{is_valid_slug, slugify};
