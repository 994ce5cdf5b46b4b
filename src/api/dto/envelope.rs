//! The uniform response envelope.
//!
//! Every Doc endpoint answers with `{code, data, msg}`: a logical status
//! code (200/400), an optional payload, and a human-readable message. The
//! HTTP status is 200 on most paths; the logical code carries success or
//! failure independently.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Message for successful operations.
pub const MSG_SUCCESS: &str = "operation succeeded";
/// Message when persistence reported success but produced no usable row.
pub const MSG_FAILURE: &str = "operation failed";
/// Message for successful deletions.
pub const MSG_DELETED: &str = "deleted successfully";

/// Uniform response wrapper, constructed once per request and never stored.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Envelope<T> {
    /// Logical status code: 200 on success, 400 on failure
    pub code: i32,
    /// Payload, present on success paths that carry data
    pub data: Option<T>,
    /// Human-readable outcome message
    pub msg: String,
}

impl<T> Envelope<T> {
    /// Successful response carrying a payload.
    pub fn ok(data: T) -> Self {
        Self {
            code: 200,
            data: Some(data),
            msg: MSG_SUCCESS.to_string(),
        }
    }

    /// Successful response with a message only.
    pub fn message(msg: impl Into<String>) -> Self {
        Self {
            code: 200,
            data: None,
            msg: msg.into(),
        }
    }

    /// Failed response with the error text.
    pub fn failure(msg: impl Into<String>) -> Self {
        Self {
            code: 400,
            data: None,
            msg: msg.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_envelope_shape() {
        let envelope = Envelope::ok(7);
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["code"], 200);
        assert_eq!(json["data"], 7);
        assert_eq!(json["msg"], MSG_SUCCESS);
    }

    #[test]
    fn test_failure_envelope_has_null_data() {
        let envelope = Envelope::<String>::failure("doc with id=9 not found");
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["code"], 400);
        assert!(json["data"].is_null());
        assert_eq!(json["msg"], "doc with id=9 not found");
    }

    #[test]
    fn test_message_envelope() {
        let envelope = Envelope::<String>::message(MSG_DELETED);
        assert_eq!(envelope.code, 200);
        assert!(envelope.data.is_none());
        assert_eq!(envelope.msg, MSG_DELETED);
    }
}
