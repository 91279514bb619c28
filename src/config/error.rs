//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid host/port combination: {0}")]
    InvalidBindAddress(String),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid session cookie name: {0:?}")]
    InvalidCookieName(String),

    #[error("Session idle timeout must be greater than zero")]
    InvalidIdleTimeout,

    #[error("Session sweep interval must be greater than zero")]
    InvalidSweepInterval,

    #[error("Session setting {0} exceeds one year")]
    SessionDurationTooLong(&'static str),
}
