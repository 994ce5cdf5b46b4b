//! Validated JSON extraction.
//!
//! Request bodies are checked with declarative `validator` rules, but a
//! `ValidationErrors` map has no stable iteration order. Types opting into
//! [`ValidatedJson`] declare their field order explicitly so the first
//! failure reported to the caller is deterministic.

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::error::{AppError, AppResult};

/// Declares the order in which a request type's fields are validated.
pub trait OrderedRules {
    /// Field names in declaration order.
    fn field_order() -> &'static [&'static str];
}

/// JSON extractor that validates the payload after deserializing it.
///
/// Rejections:
/// - body that fails to decode → `AppError::BadRequest` with the decoder text
/// - first failing validation rule (in declared field order) →
///   `AppError::Validation`
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + OrderedRules,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> AppResult<Self> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest {
                message: rejection.body_text(),
            })?;

        if let Err(errors) = value.validate()
            && let Some((field, reason)) = first_failure(&errors, T::field_order())
        {
            return Err(AppError::Validation { field, reason });
        }

        Ok(ValidatedJson(value))
    }
}

/// Returns the first failing field and its translated message, walking the
/// declared field order rather than the error map's hash order.
pub fn first_failure(
    errors: &ValidationErrors,
    order: &[&'static str],
) -> Option<(String, String)> {
    let field_errors = errors.field_errors();
    for field in order {
        if let Some(errs) = field_errors.get(*field)
            && let Some(err) = errs.first()
        {
            let reason = err
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("{field} is invalid"));
            return Some((field.to_string(), reason));
        }
    }
    // A failure outside the declared order still has to surface something.
    field_errors.iter().next().map(|(field, errs)| {
        let reason = errs
            .first()
            .and_then(|e| e.message.as_ref())
            .map(|m| m.to_string())
            .unwrap_or_else(|| format!("{field} is invalid"));
        (field.to_string(), reason)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Method, header};
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Debug, Deserialize, Validate)]
    struct TestPayload {
        #[validate(length(min = 1, max = 60, message = "Name must be between 1 and 60 characters"))]
        name: String,
        #[validate(length(
            min = 1,
            max = 60,
            message = "Display name must be between 1 and 60 characters"
        ))]
        display_name: String,
        #[validate(range(min = 0, max = 10, message = "Level must be between 0 and 10"))]
        level: i32,
    }

    impl OrderedRules for TestPayload {
        fn field_order() -> &'static [&'static str] {
            &["name", "display_name", "level"]
        }
    }

    fn json_request(body: &str) -> Request {
        Request::builder()
            .method(Method::POST)
            .uri("/test")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_payload() {
        let request =
            json_request(r#"{"name":"go","display_name":"Golang","level":1}"#);
        let result = ValidatedJson::<TestPayload>::from_request(request, &()).await;

        let ValidatedJson(payload) = result.unwrap();
        assert_eq!(payload.name, "go");
        assert_eq!(payload.level, 1);
    }

    #[tokio::test]
    async fn test_decode_failure_is_bad_request() {
        let request = json_request(r#"{"name": 17}"#);
        let result = ValidatedJson::<TestPayload>::from_request(request, &()).await;

        match result.unwrap_err() {
            AppError::BadRequest { message } => assert!(!message.is_empty()),
            other => panic!("expected BadRequest, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_first_failure_follows_declared_order() {
        // Both name and level are invalid; name is declared first.
        let request = json_request(r#"{"name":"","display_name":"ok","level":99}"#);
        let result = ValidatedJson::<TestPayload>::from_request(request, &()).await;

        match result.unwrap_err() {
            AppError::Validation { field, reason } => {
                assert_eq!(field, "name");
                assert_eq!(reason, "Name must be between 1 and 60 characters");
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_later_field_reported_when_earlier_ones_pass() {
        let request = json_request(r#"{"name":"go","display_name":"Golang","level":99}"#);
        let result = ValidatedJson::<TestPayload>::from_request(request, &()).await;

        match result.unwrap_err() {
            AppError::Validation { field, reason } => {
                assert_eq!(field, "level");
                assert_eq!(reason, "Level must be between 0 and 10");
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }
}
