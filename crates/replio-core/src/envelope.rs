// Rust guideline compliant 2026-10-16

//! Response envelope shapes written as the response body.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Message of the envelope sent when the real body cannot be serialized.
pub const FALLBACK_MESSAGE: &str = "Internal error: could not generate the response body.";

/// Standard envelope for every response body.
///
/// Field order is the wire order: `success`, `message`, `data`, `errors`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    /// Whether the request succeeded.
    pub success: bool,
    /// Human-readable message.
    pub message: String,
    /// Result payload, `null` when absent.
    pub data: Value,
    /// Detailed error descriptors.
    pub errors: Vec<Value>,
}

impl Default for ResponseEnvelope {
    fn default() -> Self {
        Self {
            success: false,
            message: String::new(),
            data: Value::Null,
            errors: Vec::new(),
        }
    }
}

/// Borrowed view of a [`ResponseEnvelope`], serialized without copying the
/// payload.
#[derive(Debug, Serialize)]
pub(crate) struct EnvelopeRef<'a> {
    pub success: bool,
    pub message: &'a str,
    pub data: &'a Value,
    pub errors: &'a [Value],
}

/// Fixed envelope used when the real envelope fails to serialize.
///
/// It carries no `data` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FallbackEnvelope {
    /// Always false.
    pub success: bool,
    /// Always [`FALLBACK_MESSAGE`].
    pub message: String,
    /// Single diagnostic describing the serialization failure.
    pub errors: Vec<String>,
}

impl FallbackEnvelope {
    /// Creates the fallback envelope for a serialization diagnostic.
    #[must_use]
    pub fn new(diagnostic: impl Into<String>) -> Self {
        let mut diagnostic = diagnostic.into();
        if diagnostic.is_empty() {
            diagnostic = "unknown serialization error".to_string();
        }
        Self {
            success: false,
            message: FALLBACK_MESSAGE.to_string(),
            errors: vec![diagnostic],
        }
    }

    /// Serializes the fallback with default formatting.
    #[must_use]
    pub fn to_vec(&self) -> Vec<u8> {
        serde_json::to_vec(self).unwrap_or_else(|_| {
            format!(r#"{{"success":false,"message":"{FALLBACK_MESSAGE}","errors":[]}}"#)
                .into_bytes()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_envelope_wire_order() {
        let text = serde_json::to_string(&ResponseEnvelope::default()).unwrap();
        assert_eq!(
            text,
            r#"{"success":false,"message":"","data":null,"errors":[]}"#
        );
    }

    #[test]
    fn test_borrowed_envelope_matches_owned() {
        let owned = ResponseEnvelope {
            success: true,
            message: "ok".to_string(),
            data: json!({"id": 1, "tags": ["a"]}),
            errors: vec![json!({"field": "name"})],
        };
        let borrowed = EnvelopeRef {
            success: owned.success,
            message: &owned.message,
            data: &owned.data,
            errors: &owned.errors,
        };
        assert_eq!(
            serde_json::to_string(&borrowed).unwrap(),
            serde_json::to_string(&owned).unwrap()
        );
    }

    #[test]
    fn test_fallback_shape() {
        let body = FallbackEnvelope::new("key must be a string").to_vec();
        let parsed: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            parsed,
            json!({
                "success": false,
                "message": FALLBACK_MESSAGE,
                "errors": ["key must be a string"],
            })
        );
    }

    #[test]
    fn test_fallback_never_has_empty_diagnostic() {
        let fallback = FallbackEnvelope::new("");
        assert_eq!(fallback.errors.len(), 1);
        assert!(!fallback.errors[0].is_empty());
    }
}
