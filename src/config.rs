//! Application configuration loaded from environment variables.

use serde::Deserialize;

use crate::error::{AppError, Result};

/// Default secret key shipped for local development.
pub const DEFAULT_SECRET_KEY: &str = "change-me-in-prod";

/// Application configuration loaded from environment variables.
///
/// Loaded once at startup and never mutated afterwards; handlers only ever
/// see it behind a shared reference.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Deployment environment name reported by the root endpoint.
    #[serde(default = "default_environment")]
    pub app_env: String,

    /// TCP port the HTTP server listens on.
    #[serde(default = "default_port")]
    pub app_port: u16,

    /// Version string reported by `/version` and the root endpoint.
    #[serde(default = "default_version")]
    pub app_version: String,

    /// Session-signing key. Not consumed by any route, but kept in the
    /// configuration contract so deployments can rotate it.
    #[serde(default = "default_secret_key")]
    pub secret_key: String,
}

fn default_environment() -> String {
    "production".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_version() -> String {
    "1.0.0".to_string()
}

fn default_secret_key() -> String {
    DEFAULT_SECRET_KEY.to_string()
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    ///
    /// A non-integer `APP_PORT` fails here, before any socket is bound.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Ok(envy::from_env()?)
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<()> {
        if self.app_port == 0 {
            return Err(AppError::Invalid(
                "APP_PORT must be a non-zero port number".to_string(),
            ));
        }

        Ok(())
    }

    /// Check if this deployment reports itself as production.
    pub fn is_production(&self) -> bool {
        self.app_env == "production"
    }

    /// Check if the secret key still holds the development default.
    pub fn has_default_secret(&self) -> bool {
        self.secret_key == DEFAULT_SECRET_KEY
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_env: default_environment(),
            app_port: default_port(),
            app_version: default_version(),
            secret_key: default_secret_key(),
        }
    }
}
