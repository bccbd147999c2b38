//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables with the
//! `config` and `dotenvy` crates. Variables use the `COGNITIVE_ANALYZER`
//! prefix and `__` between nested keys.
//!
//! # Example
//!
//! ```no_run
//! use cognitive_analyzer::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod auth;
mod database;
mod error;
mod server;

pub use auth::AuthConfig;
pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{CorsPolicy, Environment, ServerConfig};

use serde::Deserialize;

use crate::adapters::auth::JwtConfig;

/// Root application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, CORS)
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration (PostgreSQL connection)
    pub database: DatabaseConfig,

    /// Authentication configuration (JWT validation)
    pub auth: AuthConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Loads `.env` when present, then reads `COGNITIVE_ANALYZER__*`:
    ///
    /// - `COGNITIVE_ANALYZER__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `COGNITIVE_ANALYZER__DATABASE__URL=...` -> `database.url = ...`
    /// - `COGNITIVE_ANALYZER__AUTH__JWT_SECRET=...` -> `auth.jwt_secret = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or values
    /// cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("COGNITIVE_ANALYZER")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate(&self.server.environment)?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }

    /// Settings for the JWT session validator.
    pub fn jwt_config(&self) -> JwtConfig {
        let config =
            JwtConfig::new(self.auth.jwt_secret.clone()).with_leeway(self.auth.leeway_secs);
        match &self.auth.issuer {
            Some(issuer) => config.with_issuer(issuer.clone()),
            None => config,
        }
    }
}
