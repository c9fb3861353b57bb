//! `SQLite` persistence for Standup.
//!
//! - [`schema`]: the statically declared table registry and [`Metadata`],
//!   which creates or drops every table of the installed apps
//! - [`session`]: the shared [`Session`] handle and its unit of work
//! - [`repositories`]: implementations of the `standup-core` ports
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod error;
pub mod factory;
pub mod repositories;
pub mod schema;
pub mod session;
pub mod setup;

// Re-export factory for convenient access
pub use factory::CoreFactory;

// Re-export TestDb for integration tests
#[cfg(any(test, feature = "test-utils"))]
pub use factory::TestDb;

pub use repositories::{SqliteProjectRepository, SqliteStatusRepository, SqliteUserRepository};
pub use schema::{AppSchema, Metadata, SchemaError, TableDef};
pub use session::{Persist, Session, UnitOfWork};

// Re-export setup functions for convenient access
pub use setup::{connect, setup_database};
#[cfg(any(test, feature = "test-utils"))]
pub use setup::setup_test_database;
