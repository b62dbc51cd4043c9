// Rust guideline compliant 2026-10-16

//! Property-based tests for the response builder.
//!
//! Random mutator sequences are applied both to a builder and to a plain
//! model of the expected state; the sent response must match the model.

use proptest::prelude::*;
use replio_core::{CapturedResponse, ResponseBuilder, SerializationOptions};
use serde_json::{json, Value};

#[derive(Debug, Clone)]
enum Op {
    Success(String, i64),
    SuccessMessage(String),
    Error(String, u16, Vec<String>),
    Data(i64),
    Errors(Vec<String>),
    Status(u16),
    Headers(Vec<(String, String)>),
}

#[derive(Debug, Clone)]
struct Model {
    success: bool,
    message: String,
    data: Value,
    errors: Vec<Value>,
    status: u16,
    headers: Vec<(String, String)>,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            success: false,
            message: String::new(),
            data: Value::Null,
            errors: Vec::new(),
            status: 200,
            headers: Vec::new(),
        }
    }
}

impl Model {
    fn apply(&mut self, op: &Op) {
        match op {
            Op::Success(message, data) => {
                self.success = true;
                self.message = message.clone();
                self.data = json!(data);
                self.status = 200;
            }
            Op::SuccessMessage(message) => {
                self.success = true;
                self.message = message.clone();
                self.data = Value::Null;
                self.status = 200;
            }
            Op::Error(message, status, errors) => {
                self.success = false;
                self.message = message.clone();
                self.errors = errors.iter().map(|e| json!(e)).collect();
                self.status = *status;
            }
            Op::Data(data) => self.data = json!(data),
            Op::Errors(errors) => self.errors = errors.iter().map(|e| json!(e)).collect(),
            Op::Status(status) => self.status = *status,
            Op::Headers(headers) => {
                for (name, value) in headers {
                    match self.headers.iter_mut().find(|(existing, _)| existing == name) {
                        Some(entry) => entry.1 = value.clone(),
                        None => self.headers.push((name.clone(), value.clone())),
                    }
                }
            }
        }
    }
}

fn apply(builder: ResponseBuilder, op: &Op) -> ResponseBuilder {
    match op.clone() {
        Op::Success(message, data) => builder.success(message, data),
        Op::SuccessMessage(message) => builder.success_message(message),
        Op::Error(message, status, errors) => builder.error(message, status, errors),
        Op::Data(data) => builder.with_data(data),
        Op::Errors(errors) => builder.with_errors(errors),
        Op::Status(status) => builder.with_status(status),
        Op::Headers(headers) => builder.with_headers(headers),
    }
}

fn arb_header_name() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Content-Type".to_string()),
        Just("content-type".to_string()),
        Just("X-Trace".to_string()),
        "X-[A-Za-z]{1,6}",
    ]
}

fn arb_op() -> impl Strategy<Value = Op> {
    let text = "[a-z ]{0,12}";
    let errors = prop::collection::vec("[a-z]{1,8}", 0..4);
    prop_oneof![
        (text, any::<i64>()).prop_map(|(m, d)| Op::Success(m, d)),
        text.prop_map(Op::SuccessMessage),
        (text, any::<u16>(), errors.clone()).prop_map(|(m, s, e)| Op::Error(m, s, e)),
        any::<i64>().prop_map(Op::Data),
        errors.prop_map(Op::Errors),
        any::<u16>().prop_map(Op::Status),
        prop::collection::vec((arb_header_name(), "[a-z0-9/]{0,10}"), 0..4)
            .prop_map(Op::Headers),
    ]
}

proptest! {
    /// The sent response reflects the last value of every single-valued
    /// field and the cumulative header merge.
    #[test]
    fn prop_send_matches_model(ops in prop::collection::vec(arb_op(), 0..12)) {
        let mut model = Model::default();
        let mut builder = ResponseBuilder::new();
        for op in &ops {
            model.apply(op);
            builder = apply(builder, op);
        }

        let mut sink = CapturedResponse::new();
        let sent = builder.send(&mut sink).unwrap();

        prop_assert!(!sent.fallback);
        prop_assert_eq!(sink.status, Some(model.status));
        prop_assert_eq!(
            sink.body_json().unwrap(),
            json!({
                "success": model.success,
                "message": model.message,
                "data": model.data,
                "errors": model.errors,
            })
        );

        let mut expected_headers = model.headers.clone();
        if !expected_headers
            .iter()
            .any(|(name, _)| name.eq_ignore_ascii_case("content-type"))
        {
            expected_headers.push(("Content-Type".to_string(), "application/json".to_string()));
        }
        prop_assert_eq!(sink.headers, expected_headers);
    }

    /// `success` always yields a successful envelope with status 200 and
    /// never touches the error list.
    #[test]
    fn prop_success_ignores_prior_state(
        prior in prop::collection::vec(arb_op(), 0..8),
        message in "[a-z]{0,10}",
        data in any::<i64>(),
    ) {
        let mut builder = ResponseBuilder::new();
        for op in &prior {
            builder = apply(builder, op);
        }
        let errors_before = builder.errors().map(<[Value]>::to_vec);

        let builder = builder.success(message.clone(), data);
        prop_assert!(builder.is_success());
        prop_assert_eq!(builder.message(), message.as_str());
        prop_assert_eq!(builder.data(), Some(&json!(data)));
        prop_assert_eq!(builder.status(), 200);
        prop_assert_eq!(builder.errors().map(<[Value]>::to_vec), errors_before);
    }

    /// `error` always yields a failed envelope with the given status and
    /// never touches the payload.
    #[test]
    fn prop_error_ignores_prior_state(
        prior in prop::collection::vec(arb_op(), 0..8),
        message in "[a-z]{0,10}",
        status in any::<u16>(),
        errors in prop::collection::vec("[a-z]{1,8}", 0..4),
    ) {
        let mut builder = ResponseBuilder::new();
        for op in &prior {
            builder = apply(builder, op);
        }
        let data_before = builder.data().cloned();

        let builder = builder.error(message.clone(), status, errors.clone());
        prop_assert!(!builder.is_success());
        prop_assert_eq!(builder.message(), message.as_str());
        prop_assert_eq!(builder.status(), status);
        let expected: Vec<Value> = errors.iter().map(|e| json!(e)).collect();
        prop_assert_eq!(builder.errors(), Some(expected.as_slice()));
        prop_assert_eq!(builder.data().cloned(), data_before);
    }

    /// Formatting options never change the parsed body.
    #[test]
    fn prop_options_preserve_semantics(
        message in "\\PC{0,16}",
        data in "\\PC{0,16}",
        pretty_print in any::<bool>(),
        escape_slashes in any::<bool>(),
        escape_unicode in any::<bool>(),
    ) {
        let options = SerializationOptions {
            pretty_print,
            escape_slashes,
            escape_unicode,
            ..SerializationOptions::default()
        };

        let mut plain = CapturedResponse::new();
        ResponseBuilder::new()
            .success(message.clone(), data.clone())
            .send(&mut plain)
            .unwrap();

        let mut formatted = CapturedResponse::new();
        ResponseBuilder::new()
            .with_serialization_options(options)
            .success(message, data)
            .send(&mut formatted)
            .unwrap();

        prop_assert_eq!(plain.body_json().unwrap(), formatted.body_json().unwrap());
        if escape_unicode {
            prop_assert!(formatted.body.is_ascii());
        }
    }
}
