// Rust guideline compliant 2026-10-16

//! Turns command-line input into a response builder.

use replio_core::{Config, ResponseBuilder};
use serde_json::Value;

/// What kind of envelope to send.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A successful envelope.
    Success {
        /// Message text.
        message: String,
        /// Optional payload.
        data: Option<Value>,
    },
    /// A failed envelope.
    Error {
        /// Message text.
        message: String,
        /// Status code for the error.
        status: u16,
        /// Error descriptors.
        errors: Vec<Value>,
        /// Optional payload kept alongside the error.
        data: Option<Value>,
    },
}

/// Everything needed to build one response.
#[derive(Debug, Clone, PartialEq)]
pub struct Composition {
    /// Envelope kind and contents.
    pub outcome: Outcome,
    /// Status override applied after the outcome.
    pub status: Option<u16>,
    /// Custom headers in command-line order.
    pub headers: Vec<(String, String)>,
}

/// Builds the response described by a composition.
#[must_use]
pub fn compose(config: &Config, composition: Composition) -> ResponseBuilder {
    let builder = ResponseBuilder::from_config(config).with_headers(composition.headers);

    let builder = match composition.outcome {
        Outcome::Success { message, data } => {
            builder.success(message, data.unwrap_or(Value::Null))
        }
        Outcome::Error {
            message,
            status,
            errors,
            data,
        } => {
            let builder = builder.error(message, status, errors);
            match data {
                Some(data) => builder.with_data(data),
                None => builder,
            }
        }
    };

    match composition.status {
        Some(status) => builder.with_status(status),
        None => builder,
    }
}

/// Parses a value as JSON, falling back to a plain string.
#[must_use]
pub fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

/// Parses a `Name: value` header argument.
///
/// # Errors
///
/// Returns an error if there is no `:` or the name is empty.
pub fn parse_header(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected NAME:VALUE, got '{}'", raw))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("header name is empty in '{}'", raw));
    }
    Ok((name.to_string(), value.trim_start().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use replio_core::CapturedResponse;
    use serde_json::json;

    #[test]
    fn test_parse_value_json_and_text() {
        assert_eq!(parse_value(r#"{"id":1}"#), json!({"id": 1}));
        assert_eq!(parse_value("42"), json!(42));
        assert_eq!(parse_value("field x required"), json!("field x required"));
    }

    #[test]
    fn test_parse_header() {
        assert_eq!(
            parse_header("X-Trace: abc"),
            Ok(("X-Trace".to_string(), "abc".to_string()))
        );
        assert_eq!(
            parse_header("Link:</a>; rel=next"),
            Ok(("Link".to_string(), "</a>; rel=next".to_string()))
        );
        assert!(parse_header("no-colon").is_err());
        assert!(parse_header(": value").is_err());
    }

    #[test]
    fn test_compose_error_keeps_data_and_overrides_status() {
        let composition = Composition {
            outcome: Outcome::Error {
                message: "conflict".to_string(),
                status: 400,
                errors: vec![json!("duplicate")],
                data: Some(json!({"id": 3})),
            },
            status: Some(409),
            headers: vec![("X-Trace".to_string(), "t".to_string())],
        };

        let mut sink = CapturedResponse::new();
        compose(&Config::default(), composition)
            .send(&mut sink)
            .unwrap();

        assert_eq!(sink.status, Some(409));
        assert_eq!(sink.header("X-Trace"), Some("t"));
        assert_eq!(
            sink.body_json().unwrap(),
            json!({
                "success": false,
                "message": "conflict",
                "data": {"id": 3},
                "errors": ["duplicate"],
            })
        );
    }

    #[test]
    fn test_compose_success_without_data() {
        let composition = Composition {
            outcome: Outcome::Success {
                message: String::new(),
                data: None,
            },
            status: None,
            headers: Vec::new(),
        };

        let builder = compose(&Config::default(), composition);
        assert!(builder.is_success());
        assert_eq!(builder.data(), Some(&Value::Null));
        assert_eq!(builder.status(), 200);
    }
}
