//! Application factory - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the web adapter. All concrete implementations are instantiated here.

use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use tokio::net::TcpListener;

use standup_core::{AppConfig, AppCore};
use standup_db::{CoreFactory, Metadata, Session, connect};

use crate::routes::create_router;

/// Services reachable from every handler.
pub struct AppContext {
    /// The configuration the application was created with.
    pub config: AppConfig,
    /// The core application facade.
    pub core: Arc<AppCore>,
}

/// One application instance.
///
/// Cloning an `App` shares its database session and router; it does not
/// open a new database.
#[derive(Clone)]
pub struct App {
    config: Arc<AppConfig>,
    session: Session,
    metadata: Metadata,
    router: Router,
}

impl App {
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Installed app names, in registration order.
    pub fn installed_apps(&self) -> &[String] {
        &self.config.installed_apps
    }

    /// The database session bound to this application instance.
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Tables declared by the installed apps.
    pub const fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// A handle to the application's router.
    pub fn router(&self) -> Router {
        self.router.clone()
    }
}

/// Build an application instance from `config`.
///
/// Connects the database but does not create any tables; callers decide
/// when the schema exists (the binary creates it at startup, test fixtures
/// around each test).
pub async fn create_app(config: AppConfig) -> Result<App> {
    config.validate()?;
    let metadata = Metadata::for_apps(&config.installed_apps)?;

    let pool = connect(&config.database_url).await?;
    let session = Session::new(pool);
    let repos = CoreFactory::build_repos(&session);
    let core = Arc::new(AppCore::new(repos));

    tracing::info!(
        target: "standup.app",
        database_url = %config.database_url,
        installed_apps = ?config.installed_apps,
        tables = ?metadata.table_names(),
        testing = config.testing,
        "Created application"
    );

    let router = create_router(AppContext {
        config: config.clone(),
        core,
    });

    Ok(App {
        config: Arc::new(config),
        session,
        metadata,
        router,
    })
}

/// Serve `app` on its configured bind address until the process stops.
pub async fn serve(app: &App) -> Result<()> {
    let addr = app.config().bind_addr;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("standup listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app.router()).await?;
    Ok(())
}
