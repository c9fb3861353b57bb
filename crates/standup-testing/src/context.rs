//! Per-test fixture lifecycle.

use standup_axum::{App, create_app};
use standup_core::{AppConfig, RepositoryError};
use standup_db::Session;

use crate::client::TestClient;
use crate::error::FixtureError;
use crate::factories::{ProjectFactory, StatusFactory, UserFactory};

/// One test's application, schema and client.
///
/// [`set_up`](Self::set_up) creates every table the installed apps declare;
/// [`tear_down`](Self::tear_down) drops them again. Both are idempotent, so
/// the same application can go through any number of set up / tear down
/// cycles.
pub struct TestContext {
    app: App,
    client: TestClient,
}

impl TestContext {
    /// Create an application from `config` and set up its schema.
    pub async fn set_up(config: AppConfig) -> Result<Self, FixtureError> {
        let app = create_app(config).await?;
        Self::set_up_with(app).await
    }

    /// Set up the schema for an existing application.
    pub async fn set_up_with(app: App) -> Result<Self, FixtureError> {
        app.metadata().create_all(app.session().bind()).await?;
        tracing::debug!(
            target: "standup.testing",
            tables = ?app.metadata().table_names(),
            "Created test schema"
        );

        let client = TestClient::new(app.router());
        Ok(Self { app, client })
    }

    /// Drop every table and hand the application back.
    pub async fn tear_down(self) -> Result<App, FixtureError> {
        self.app.metadata().drop_all(self.app.session().bind()).await?;
        tracing::debug!(target: "standup.testing", "Dropped test schema");
        Ok(self.app)
    }

    pub const fn app(&self) -> &App {
        &self.app
    }

    /// The session every factory persists through.
    pub const fn session(&self) -> &Session {
        self.app.session()
    }

    pub const fn client(&self) -> &TestClient {
        &self.client
    }

    /// Number of rows currently in `table`.
    pub async fn count_rows(&self, table: &str) -> Result<i64, FixtureError> {
        if !self.app.metadata().contains(table) {
            return Err(FixtureError::UnknownTable(table.to_string()));
        }
        let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(self.session().bind())
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;
        Ok(count)
    }

    pub const fn project(&self) -> ProjectFactory<'_> {
        ProjectFactory::new(self.session())
    }

    pub const fn user(&self) -> UserFactory<'_> {
        UserFactory::new(self.session())
    }

    pub const fn status(&self) -> StatusFactory<'_> {
        StatusFactory::new(self.session())
    }
}
