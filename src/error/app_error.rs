use crate::error::DatabaseErrorConverter;
use thiserror::Error;

/// Application-wide error type that represents all possible errors in the system.
///
/// Every failure surfaced to a caller goes through this enum; the HTTP layer
/// turns it into the uniform response envelope (see `api::middleware`).
#[derive(Error, Debug)]
pub enum AppError {
    /// Resource not found error with entity, field, and value information
    #[error("{entity} with {field}={value} not found")]
    NotFound {
        entity: String,
        field: String,
        value: String,
    },

    /// Duplicate entry error for unique constraint violations
    #[error("duplicate entry: {entity}.{field} already exists")]
    Duplicate { entity: String, field: String },

    /// Validation error with field-specific details
    #[error("{reason}")]
    Validation { field: String, reason: String },

    /// Bad request error with descriptive message
    #[error("{message}")]
    BadRequest { message: String },

    /// Database operation error with operation context
    #[error("database operation failed: {operation}")]
    Database {
        operation: String,
        #[source]
        source: anyhow::Error,
    },

    /// Configuration error with key information
    #[error("configuration error: {key}")]
    Configuration {
        key: String,
        #[source]
        source: anyhow::Error,
    },

    /// Connection pool error
    #[error("connection pool error")]
    ConnectionPool {
        #[source]
        source: anyhow::Error,
    },

    /// Internal error for unexpected failures
    #[error("internal error")]
    Internal {
        #[source]
        source: anyhow::Error,
    },
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        AppError::Internal { source: error }
    }
}

impl From<diesel::result::Error> for AppError {
    fn from(error: diesel::result::Error) -> Self {
        DatabaseErrorConverter::convert_diesel_error(error, "database operation")
    }
}

impl From<bb8::RunError<diesel_async::pooled_connection::PoolError>> for AppError {
    fn from(error: bb8::RunError<diesel_async::pooled_connection::PoolError>) -> Self {
        AppError::ConnectionPool {
            source: anyhow::Error::from(error),
        }
    }
}

/// Type alias for Result with AppError to simplify function signatures
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = AppError::NotFound {
            entity: "doc".to_string(),
            field: "id".to_string(),
            value: "42".to_string(),
        };
        assert_eq!(err.to_string(), "doc with id=42 not found");
    }

    #[test]
    fn test_validation_display_is_just_the_reason() {
        let err = AppError::Validation {
            field: "name".to_string(),
            reason: "Name must be between 1 and 60 characters".to_string(),
        };
        assert_eq!(err.to_string(), "Name must be between 1 and 60 characters");
    }

    #[test]
    fn test_diesel_not_found_conversion() {
        let err: AppError = diesel::result::Error::NotFound.into();
        assert!(matches!(err, AppError::NotFound { .. }));
    }
}
