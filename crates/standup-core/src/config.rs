//! Application configuration.
//!
//! `AppConfig` is the single configuration object handed to the
//! application factory. It can be built from defaults, from the
//! environment (after loading a `.env` file), or in testing mode, where
//! every instance points at its own private in-memory database.

use std::env;
use std::net::SocketAddr;

use thiserror::Error;

/// Applications installed by default, in registration order.
///
/// `api` declares no tables of its own; it is listed so that schema
/// discovery has to cope with apps that contribute nothing.
pub const DEFAULT_INSTALLED_APPS: &[&str] = &["status", "users", "api"];

/// Default database URL for a regular (non-test) run.
pub const DEFAULT_DATABASE_URL: &str = "sqlite:standup.db";

/// Default listen address for the HTTP server.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";

/// Default `tracing` filter directive.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{var} has an invalid value '{value}': {reason}")]
    InvalidEnv {
        var: &'static str,
        value: String,
        reason: String,
    },

    #[error("database URL must start with 'sqlite:', got '{0}'")]
    UnsupportedDatabase(String),

    #[error("installed app names must not be empty")]
    EmptyAppName,
}

/// Settings consumed by the application factory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// `SQLite` connection URL.
    pub database_url: String,
    /// Names of installed application modules, in registration order.
    pub installed_apps: Vec<String>,
    /// Testing mode: error responses keep their internal detail.
    pub testing: bool,
    /// Listen address for `standup serve`.
    pub bind_addr: SocketAddr,
    /// `tracing` filter directive used by the binary.
    pub log_filter: String,
}

impl AppConfig {
    /// Create config with default values.
    pub fn with_defaults() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            installed_apps: DEFAULT_INSTALLED_APPS
                .iter()
                .map(ToString::to_string)
                .collect(),
            testing: false,
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8000)),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }

    /// Configuration for a test run.
    ///
    /// Each call names a fresh shared-cache in-memory database, so two
    /// test contexts never see each other's tables.
    pub fn testing() -> Self {
        let name = uuid::Uuid::new_v4().simple();
        Self {
            database_url: format!("sqlite:file:standup-test-{name}?mode=memory&cache=shared"),
            testing: true,
            ..Self::with_defaults()
        }
    }

    /// Load configuration from the environment.
    ///
    /// A `.env` file in the working directory is loaded first if present.
    /// Recognised variables:
    ///
    /// * `STANDUP_DATABASE_URL`
    /// * `STANDUP_INSTALLED_APPS` (comma separated)
    /// * `STANDUP_TESTING` (`1`/`true`/`yes` or `0`/`false`/`no`)
    /// * `STANDUP_BIND_ADDR`
    /// * `STANDUP_LOG`
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(target: "standup.config", path = %path.display(), "Loaded .env file");
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::with_defaults();

        if let Some(url) = lookup("STANDUP_DATABASE_URL") {
            config.database_url = url;
        }
        if let Some(apps) = lookup("STANDUP_INSTALLED_APPS") {
            config.installed_apps = apps
                .split(',')
                .map(str::trim)
                .filter(|app| !app.is_empty())
                .map(ToString::to_string)
                .collect();
        }
        if let Some(value) = lookup("STANDUP_TESTING") {
            config.testing = parse_bool("STANDUP_TESTING", &value)?;
        }
        if let Some(value) = lookup("STANDUP_BIND_ADDR") {
            config.bind_addr = value.parse().map_err(|e: std::net::AddrParseError| {
                ConfigError::InvalidEnv {
                    var: "STANDUP_BIND_ADDR",
                    value: value.clone(),
                    reason: e.to_string(),
                }
            })?;
        }
        if let Some(filter) = lookup("STANDUP_LOG") {
            config.log_filter = filter;
        }

        config.validate()?;
        Ok(config)
    }

    /// Set the database URL.
    #[must_use]
    pub fn with_database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = url.into();
        self
    }

    /// Replace the installed apps.
    #[must_use]
    pub fn with_installed_apps<I, S>(mut self, apps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.installed_apps = apps.into_iter().map(Into::into).collect();
        self
    }

    /// Set testing mode.
    #[must_use]
    pub const fn with_testing(mut self, testing: bool) -> Self {
        self.testing = testing;
        self
    }

    /// Check invariants that the application factory relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.database_url.starts_with("sqlite:") {
            return Err(ConfigError::UnsupportedDatabase(self.database_url.clone()));
        }
        if self.installed_apps.iter().any(|app| app.trim().is_empty()) {
            return Err(ConfigError::EmptyAppName);
        }
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidEnv {
            var,
            value: value.to_string(),
            reason: "expected a boolean".to_string(),
        }),
    }
}
