//! Error types for LuGPT.
//!
//! This module defines a unified error enum that covers all error categories
//! in the application: configuration, I/O, the external retrieval service,
//! and response parsing.

use thiserror::Error;

/// Unified error type for LuGPT.
///
/// All functions in the application return `Result<T, AppError>`.
/// We never panic — errors must be represented and propagated.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O and filesystem errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// External retrieval/generation service errors (network, auth, quota,
    /// timeout). Never retried automatically; the current turn fails whole.
    #[error("Retrieval service error: {0}")]
    Service(String),

    /// The service payload lacked the expected answer/sources marker.
    /// Fatal to the current turn; nothing is recorded in the history.
    #[error("Malformed service response: {0}")]
    MalformedResponse(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(err: serde_yaml::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_error_display() {
        let err = AppError::Service("connection refused".to_string());
        assert_eq!(
            err.to_string(),
            "Retrieval service error: connection refused"
        );
    }

    #[test]
    fn test_malformed_response_display() {
        let err = AppError::MalformedResponse("marker not found".to_string());
        assert!(err.to_string().contains("marker not found"));
    }
}
