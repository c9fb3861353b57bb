//! Database connection and initialization.
//!
//! Entry points call [`setup_database`] with the configured URL and the
//! metadata of the installed apps.

use std::str::FromStr;

use anyhow::Result;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::schema::Metadata;

/// Whether `database_url` names an in-memory database.
fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

/// Connect a pool for `database_url`.
///
/// File databases are created if missing. An in-memory database only lives
/// as long as a connection to it is open, so it gets exactly one connection
/// that never idles out or expires.
pub async fn connect(database_url: &str) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    let pool = if is_in_memory(database_url) {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?
    } else {
        SqlitePoolOptions::new().connect_with(options).await?
    };

    tracing::debug!(
        target: "standup.db",
        database_url,
        in_memory = is_in_memory(database_url),
        "Connected database pool"
    );
    Ok(pool)
}

/// Connect to `database_url` and ensure every table in `metadata` exists.
///
/// # Example
///
/// ```rust,no_run
/// use standup_db::{Metadata, setup_database};
///
/// # async fn example() -> anyhow::Result<()> {
/// let metadata = Metadata::for_apps(&["status", "users"])?;
/// let pool = setup_database("sqlite:standup.db", &metadata).await?;
/// # Ok(())
/// # }
/// ```
pub async fn setup_database(database_url: &str, metadata: &Metadata) -> Result<SqlitePool> {
    let pool = connect(database_url).await?;
    metadata.create_all(&pool).await?;
    Ok(pool)
}

/// Sets up a private in-memory database with the default apps' schema.
#[cfg(any(test, feature = "test-utils"))]
pub async fn setup_test_database() -> Result<SqlitePool> {
    let config = standup_core::AppConfig::testing();
    let metadata = Metadata::for_apps(&config.installed_apps)?;
    setup_database(&config.database_url, &metadata).await
}
