//! Unified error types for the status service.

use thiserror::Error;

/// Unified error type for the status service.
///
/// Every variant is a startup-time failure; defined routes never error once
/// the server is accepting connections.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration loading error (e.g. a non-integer APP_PORT).
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Semantic configuration validation error.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, AppError>;
