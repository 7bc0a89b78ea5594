//! Error handling for the Food Technology Class Management backend

use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {message}")]
    Validation { field: String, message: String },

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Invalid state transition: {0}")]
    InvalidStateTransition(String),

    #[error("Configuration error: {0}")]
    Configuration(#[from] config::ConfigError),

    /// Failure in the underlying store; propagated to the caller
    /// untouched, with no partial result
    #[error("Storage error: {0}")]
    Store(#[from] anyhow::Error),
}

impl AppError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Result type alias for services and jobs
pub type AppResult<T> = Result<T, AppError>;
