//! Error handling for application errors surfaced to HTTP.
//!
//! Converts `AppError` into envelope responses. Domain errors are served
//! as HTTP 200 with a failure envelope so clients only need to inspect
//! the envelope code; infrastructure errors map to HTTP 500.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::api::dto::Envelope;
use crate::error::AppError;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NotFound { .. }
            | AppError::Duplicate { .. }
            | AppError::Validation { .. }
            | AppError::BadRequest { .. } => StatusCode::OK,
            AppError::Database { operation, source } => {
                error!(operation = %operation, error = %source, "Database error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Configuration { key, source } => {
                error!(key = %key, error = %source, "Configuration error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::ConnectionPool { source } => {
                error!(error = %source, "Connection pool error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Internal { source } => {
                error!(error = %source, "Internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let envelope = Envelope::<String>::failure(self.to_string());
        (status, Json(envelope)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_errors_are_http_ok() {
        let response = AppError::NotFound {
            entity: "doc".to_string(),
            field: "id".to_string(),
            value: "7".to_string(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let response = AppError::Validation {
            field: "name".to_string(),
            reason: "name must not be empty".to_string(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let response = AppError::BadRequest {
            message: "malformed json".to_string(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn test_infrastructure_errors_are_http_500() {
        let response = AppError::Internal {
            source: anyhow::anyhow!("boom"),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
