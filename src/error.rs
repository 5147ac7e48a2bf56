//! Error types for the library admin client

use reqwest::StatusCode;
use thiserror::Error;

use crate::forms::FieldErrors;

/// A monetary or numeric field could not be turned into a positive finite number.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid number format: {input:?}")]
pub struct InvalidNumberFormat {
    pub input: String,
}

impl InvalidNumberFormat {
    pub fn new(input: impl Into<String>) -> Self {
        Self { input: input.into() }
    }
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Token missing, expired or refused by the API.
    #[error("Authentication rejected: {0}")]
    AuthRejected(String),

    #[error(transparent)]
    InvalidNumberFormat(#[from] InvalidNumberFormat),

    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    /// Map a non-success HTTP status to the matching error.
    pub fn from_status(status: StatusCode, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => AppError::AuthRejected(message),
            StatusCode::NOT_FOUND => AppError::NotFound(message),
            _ => AppError::Api {
                status: status.as_u16(),
                message,
            },
        }
    }

    pub fn is_auth_rejected(&self) -> bool {
        matches!(self, AppError::AuthRejected(_))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        match e.status() {
            Some(status) => AppError::from_status(status, e.to_string()),
            None => AppError::Network(e.to_string()),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Storage(e.to_string())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
