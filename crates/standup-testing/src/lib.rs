//! Test support for Standup.
//!
//! - [`TestContext`]: per-test fixture that creates every installed app's
//!   tables on set up and drops them on tear down
//! - [`TestClient`]: drives the application router in-process
//! - [`factories`]: builders for projects, users and statuses with fixed
//!   defaults, an opt-in `save` flag and automatic creation of a status's
//!   user and project
//!
//! ```rust,no_run
//! use standup_core::AppConfig;
//! use standup_testing::TestContext;
//!
//! # async fn example() -> Result<(), standup_testing::FixtureError> {
//! let ctx = TestContext::set_up(AppConfig::testing()).await?;
//! let status = ctx.status().save(true).build().await?;
//! assert!(status.id.is_some());
//! ctx.tear_down().await?;
//! # Ok(())
//! # }
//! ```
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

#[cfg(test)]
use tempfile as _;
#[cfg(test)]
use tokio as _;

mod client;
mod context;
mod error;
pub mod factories;

pub use client::{TestClient, TestResponse};
pub use context::TestContext;
pub use error::FixtureError;
pub use factories::{ProjectFactory, StatusFactory, UserFactory};
