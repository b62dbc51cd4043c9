// Rust guideline compliant 2026-10-16

//! Replio Core Library
//!
//! Builds uniform JSON API responses: a fixed envelope (`success`, `message`,
//! `data`, `errors`) with a status code, custom headers and formatting
//! options, emitted through a caller-supplied sink.
//! - Response builder with fluent mutators and a terminal `send`
//! - Envelope shapes, including the internal-error fallback
//! - Output sinks (in-memory capture, raw HTTP/1.1 writer)
//! - Serialization options, status codes and configuration
//!
//! ```
//! use replio_core::{CapturedResponse, ResponseBuilder};
//! use serde_json::json;
//!
//! let mut sink = CapturedResponse::new();
//! ResponseBuilder::new()
//!     .success("ok", json!({"id": 1}))
//!     .send(&mut sink)?;
//!
//! assert_eq!(sink.status, Some(200));
//! assert_eq!(
//!     sink.body_text(),
//!     r#"{"success":true,"message":"ok","data":{"id":1},"errors":[]}"#
//! );
//! # Ok::<(), replio_core::Error>(())
//! ```

pub mod builder;
pub mod config;
pub mod envelope;
pub mod error;
pub mod finite;
pub mod headers;
pub mod options;
pub mod sink;
pub mod status;

pub use builder::{ResponseBuilder, Sent};
pub use config::Config;
pub use envelope::{FallbackEnvelope, ResponseEnvelope, FALLBACK_MESSAGE};
pub use error::{Error, Result};
pub use finite::NON_FINITE_MESSAGE;
pub use headers::HeaderMap;
pub use options::SerializationOptions;
pub use sink::{CapturedResponse, Http1Writer, ResponseSink, SinkCall};
