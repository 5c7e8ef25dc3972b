use miette::{Diagnostic, Result};
use thiserror::Error;

/// Main error type for the application
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Environment error: {0}")]
    #[diagnostic(code(calnotify::environment))]
    Environment(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(code(calnotify::config))]
    Config(String),

    #[error("Calendar source error: {0}")]
    #[diagnostic(code(calnotify::source))]
    SourceUnavailable(String),

    #[error("Slack delivery error: {0}")]
    #[diagnostic(code(calnotify::delivery))]
    DeliveryFailed(String),
}

/// Type alias for Result with our Error type
pub type NotifyResult<T> = Result<T, Error>;

/// Helper to create environment errors
pub fn env_error(var: &str) -> Error {
    Error::Environment(format!("Missing environment variable: {}", var))
}

/// Helper to create calendar source errors
pub fn source_error(message: &str) -> Error {
    Error::SourceUnavailable(message.to_string())
}

/// Helper to create delivery errors
pub fn delivery_error(message: &str) -> Error {
    Error::DeliveryFailed(message.to_string())
}
