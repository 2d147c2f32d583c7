//! # Configuration
//!
//! Layered settings: defaults, then an optional `config` file, then
//! `APP_`-prefixed environment variables (`APP_SERVER__PORT=8080`).
//! `DATABASE_URL` is honored directly since every deployment target
//! already sets it that way.

use serde::Deserialize;

/// Root configuration for the service.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// HTTP server settings.
    pub server: ServerSettings,
    /// Database settings.
    pub database: DatabaseSettings,
}

/// HTTP server settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
}

/// Database settings.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// PostgreSQL connection string.
    pub url: String,
    /// Upper bound on pooled connections.
    pub max_connections: u32,
}

impl Settings {
    /// Loads settings from defaults, file, and environment.
    ///
    /// # Errors
    ///
    /// Returns a `config::ConfigError` if a source is malformed or the
    /// database URL is missing from every layer.
    pub fn load() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000_i64)?
            .set_default("database.max_connections", 5_i64)?
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?
            .build()?
            .try_deserialize()
    }

    /// Returns the `host:port` pair to bind.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
