//! API error types for the catalog client.

use thiserror::Error;

/// Errors that can occur when talking to the artwork catalog.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Requested resource does not exist (e.g. a page past the end).
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Rate limited by the catalog.
    #[error("Rate limited: please wait before retrying")]
    RateLimited,

    /// Catalog server error (5xx).
    #[error("Catalog server error: {0}")]
    ServerError(String),

    /// The catalog rejected the request itself; repeating it will not help.
    #[error("Request rejected (HTTP {status}): {message}")]
    ClientError { status: u16, message: String },

    /// Network or HTTP error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Invalid base URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The response body could not be understood.
    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

/// Result type for API operations.
pub type Result<T> = std::result::Result<T, ApiError>;

impl ApiError {
    /// Create an error from an HTTP status code.
    pub fn from_status(status: reqwest::StatusCode, context: &str) -> Self {
        match status.as_u16() {
            404 => ApiError::NotFound(context.to_string()),
            429 => ApiError::RateLimited,
            500..=599 => ApiError::ServerError(format!("HTTP {}: {}", status, context)),
            code => ApiError::ClientError {
                status: code,
                message: context.to_string(),
            },
        }
    }

    /// Whether a retry has a chance of succeeding.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            ApiError::RateLimited | ApiError::Network(_) | ApiError::ServerError(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_error_from_status_404() {
        let err = ApiError::from_status(StatusCode::NOT_FOUND, "page 9999");
        match err {
            ApiError::NotFound(msg) => assert_eq!(msg, "page 9999"),
            _ => panic!("Expected NotFound error"),
        }
    }

    #[test]
    fn test_error_from_status_429() {
        let err = ApiError::from_status(StatusCode::TOO_MANY_REQUESTS, "test");
        assert!(matches!(err, ApiError::RateLimited));
    }

    #[test]
    fn test_error_from_status_500() {
        let err = ApiError::from_status(StatusCode::INTERNAL_SERVER_ERROR, "test");
        assert!(matches!(err, ApiError::ServerError(_)));
        assert!(err.is_transient());
    }

    #[test]
    fn test_client_status_keeps_code_and_reason() {
        let err = ApiError::from_status(StatusCode::FORBIDDEN, "Invalid number of results");
        match &err {
            ApiError::ClientError { status, message } => {
                assert_eq!(*status, 403);
                assert_eq!(message, "Invalid number of results");
            }
            other => panic!("Expected ClientError, got {:?}", other),
        }
        assert!(!err.is_transient());
        assert_eq!(
            err.to_string(),
            "Request rejected (HTTP 403): Invalid number of results"
        );
    }

    #[test]
    fn test_bad_request_is_client_error() {
        let err = ApiError::from_status(StatusCode::BAD_REQUEST, "limit too large");
        assert!(matches!(err, ApiError::ClientError { status: 400, .. }));
        assert!(!err.is_transient());
    }

    #[test]
    fn test_not_found_is_not_transient() {
        let err = ApiError::NotFound("x".to_string());
        assert!(!err.is_transient());
    }

    #[test]
    fn test_error_display() {
        let err = ApiError::RateLimited;
        assert_eq!(err.to_string(), "Rate limited: please wait before retrying");

        let err = ApiError::NotFound("page 3".to_string());
        assert_eq!(err.to_string(), "Resource not found: page 3");
    }
}
