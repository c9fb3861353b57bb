//! Repository implementations using `SQLite`.
//!
//! These implementations encapsulate all SQL queries and database access.
//! The pool is confined to this crate and never exposed through the port
//! trait signatures. Inserts go through the shared [`Session`](crate::Session).

mod row_mappers;
mod sqlite_project_repository;
mod sqlite_status_repository;
mod sqlite_user_repository;

pub use sqlite_project_repository::SqliteProjectRepository;
pub use sqlite_status_repository::SqliteStatusRepository;
pub use sqlite_user_repository::SqliteUserRepository;
