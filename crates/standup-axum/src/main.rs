//! `standup` - serve the status update API.

use std::net::SocketAddr;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use standup_axum::{create_app, serve};
use standup_core::AppConfig;

/// Command-line interface for the Standup server.
///
/// Flags override the `STANDUP_*` environment variables.
#[derive(Parser)]
#[command(name = "standup")]
#[command(about = "Serve the Standup status update API")]
#[command(version)]
struct Cli {
    /// `SQLite` database URL, e.g. `sqlite:standup.db`
    #[arg(long = "database-url")]
    database_url: Option<String>,

    /// Address to listen on
    #[arg(long = "bind")]
    bind: Option<SocketAddr>,

    /// `tracing` filter directive, e.g. `debug` or `standup=trace`
    #[arg(long = "log")]
    log: Option<String>,
}

impl Cli {
    fn apply(self, mut config: AppConfig) -> AppConfig {
        if let Some(url) = self.database_url {
            config = config.with_database_url(url);
        }
        if let Some(bind) = self.bind {
            config.bind_addr = bind;
        }
        if let Some(filter) = self.log {
            config.log_filter = filter;
        }
        config
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.apply(AppConfig::from_env()?);

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.log_filter)?)
        .init();

    let app = create_app(config).await?;
    app.metadata().create_all(app.session().bind()).await?;

    serve(&app).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::parse_from([
            "standup",
            "--database-url",
            "sqlite:other.db",
            "--bind",
            "0.0.0.0:9000",
        ]);
        let config = cli.apply(AppConfig::with_defaults());
        assert_eq!(config.database_url, "sqlite:other.db");
        assert_eq!(config.bind_addr.port(), 9000);
        assert_eq!(config.log_filter, "info");
    }
}
