//! Centralized error types for Artview.
//!
//! Each layer has its own `thiserror` enum; `AppError` aggregates them and
//! knows how to phrase them for the status bar and notifications.

use thiserror::Error;

use crate::api::ApiError;
use crate::config::ConfigError;

/// The main application error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration-related errors.
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// Catalog API errors.
    #[error("{0}")]
    Api(#[from] ApiError),

    /// IO errors (file system, terminal).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Get a short message suitable for showing in the UI.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Config(ConfigError::ValidationError(msg)) => {
                format!("Configuration error: {}", msg)
            }
            AppError::Config(ConfigError::ParseError(_)) => {
                "Configuration file is invalid. Please check the file format.".to_string()
            }
            AppError::Config(_) => {
                "Could not access the configuration file. Check file permissions.".to_string()
            }
            AppError::Api(e) => match e {
                ApiError::NotFound(resource) => format!("'{}' was not found.", resource),
                ApiError::RateLimited => {
                    "Too many requests. Please wait a moment and press 'r' to reload.".to_string()
                }
                ApiError::ServerError(_) => {
                    "Catalog server error. Please try again later.".to_string()
                }
                ApiError::ClientError { status, message } => {
                    format!("The catalog rejected the request (HTTP {}): {}", status, message)
                }
                ApiError::Network(_) => {
                    "Connection failed. Please check your internet connection.".to_string()
                }
                ApiError::InvalidUrl(url) => format!("Invalid catalog URL: {}", url),
                ApiError::InvalidResponse(_) => {
                    "Unexpected response from the catalog.".to_string()
                }
            },
            AppError::Io(_) => "A file operation failed. Please check file permissions.".to_string(),
        }
    }
}

/// Result type for application operations.
pub type Result<T> = std::result::Result<T, AppError>;
