//! Error types for the Kaskady server.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when reading or writing a record collection.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Filesystem operation failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to encode or decode a collection
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A record with the same key is already stored
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    /// The blocking task running the file operation failed
    #[error("Store task failed: {0}")]
    TaskJoin(String),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors that can occur when delivering a notification.
#[derive(Error, Debug)]
pub enum NotifyError {
    /// HTTP transport failed
    #[error("Mail transport failed: {0}")]
    Transport(String),

    /// The mail relay answered with an error status
    #[error("Mail relay rejected message (status {status}): {message}")]
    Rejected { status: u16, message: String },

    /// The blocking task running the delivery failed
    #[error("Notification task failed: {0}")]
    TaskJoin(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors returned by the application services.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// The request was rejected before anything was stored
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The requested record does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Persisting the record failed
    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
}

/// Convenience type alias for Results with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Convenience type alias for Results with NotifyError
pub type NotifyResult<T> = Result<T, NotifyError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with ServiceError
pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::DuplicateKey("BK-ABC".to_string());
        assert_eq!(err.to_string(), "Duplicate key: BK-ABC");

        let err = ConfigError::MissingVar("MAIL_API_KEY".to_string());
        assert_eq!(
            err.to_string(),
            "Missing required environment variable: MAIL_API_KEY"
        );

        let err = ServiceError::NotFound("BK-ZZZZZZ".to_string());
        assert_eq!(err.to_string(), "Not found: BK-ZZZZZZ");
    }

    #[test]
    fn test_validation_error_is_transparent() {
        let err: ServiceError = ValidationError::InvalidRoomType("villa".to_string()).into();
        assert_eq!(err.to_string(), "Invalid room type.");
    }

    #[test]
    fn test_notify_rejected_display() {
        let err = NotifyError::Rejected {
            status: 502,
            message: "Bad gateway".to_string(),
        };
        assert!(err.to_string().contains("502"));
        assert!(err.to_string().contains("Bad gateway"));
    }

    #[test]
    fn test_io_error_mentions_path() {
        let err = StoreError::io(
            "/tmp/data/bookings.json",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().contains("bookings.json"));
    }
}
