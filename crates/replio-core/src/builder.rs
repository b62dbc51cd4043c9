// Rust guideline compliant 2026-10-16

//! Fluent builder for uniform JSON responses.
//!
//! A [`ResponseBuilder`] accumulates the envelope, status, headers and
//! formatting options, then [`send`](ResponseBuilder::send) renders the body
//! and writes everything to a [`ResponseSink`] in one pass.

use crate::config::Config;
use crate::envelope::{EnvelopeRef, FallbackEnvelope, ResponseEnvelope};
use crate::finite;
use crate::headers::{self, HeaderMap, CONTENT_TYPE, DEFAULT_CONTENT_TYPE};
use crate::options::{self, SerializationOptions};
use crate::sink::ResponseSink;
use crate::{status, Error, Result};
use serde::Serialize;
use serde_json::Value;

/// Summary of a response handed to a sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sent {
    /// Status actually emitted.
    pub status: u16,
    /// Number of body bytes written.
    pub body_len: usize,
    /// Whether the fallback envelope replaced the body.
    pub fallback: bool,
}

/// Builder for a single JSON API response.
///
/// Every mutator takes the builder by value and returns it, so calls chain.
/// For single-valued fields the last call wins; headers accumulate.
/// `data` and `errors` are converted to JSON when set; a value that cannot be
/// converted is remembered and turns the response into the fallback envelope
/// with status 500 at send time.
#[derive(Debug, Clone)]
pub struct ResponseBuilder {
    success: bool,
    message: String,
    data: std::result::Result<Value, String>,
    errors: std::result::Result<Vec<Value>, String>,
    status: u16,
    headers: HeaderMap,
    options: SerializationOptions,
    strict: bool,
}

impl Default for ResponseBuilder {
    fn default() -> Self {
        Self {
            success: false,
            message: String::new(),
            data: Ok(Value::Null),
            errors: Ok(Vec::new()),
            status: status::OK,
            headers: HeaderMap::new(),
            options: SerializationOptions::default(),
            strict: false,
        }
    }
}

fn to_json<T: Serialize>(value: T) -> std::result::Result<Value, String> {
    finite::check(&value)
        .and_then(|()| serde_json::to_value(value))
        .map_err(|e| e.to_string())
}

fn to_json_list<I>(items: I) -> std::result::Result<Vec<Value>, String>
where
    I: IntoIterator,
    I::Item: Serialize,
{
    items.into_iter().map(to_json).collect()
}

impl ResponseBuilder {
    /// Creates a builder with an empty, unsuccessful envelope and status 200.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder whose options and strictness come from configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            options: config.serialization,
            strict: config.strict,
            ..Self::default()
        }
    }

    /// Marks the response successful with a message and payload.
    ///
    /// Resets the status to 200. Previously set errors are left alone.
    #[must_use]
    pub fn success<T: Serialize>(mut self, message: impl Into<String>, data: T) -> Self {
        self.success = true;
        self.message = message.into();
        self.data = to_json(data);
        self.status = status::OK;
        self
    }

    /// Marks the response successful with a message and no payload.
    #[must_use]
    pub fn success_message(self, message: impl Into<String>) -> Self {
        self.success(message, Value::Null)
    }

    /// Marks the response failed with a message, status and error list.
    ///
    /// Previously set data is left alone.
    #[must_use]
    pub fn error<I>(mut self, message: impl Into<String>, http_status: u16, errors: I) -> Self
    where
        I: IntoIterator,
        I::Item: Serialize,
    {
        self.success = false;
        self.message = message.into();
        self.errors = to_json_list(errors);
        self.status = http_status;
        self
    }

    /// Marks the response failed with status 400 and no error details.
    #[must_use]
    pub fn bad_request(self, message: impl Into<String>) -> Self {
        self.error(message, status::BAD_REQUEST, Vec::<Value>::new())
    }

    /// Replaces the payload.
    #[must_use]
    pub fn with_data<T: Serialize>(mut self, data: T) -> Self {
        self.data = to_json(data);
        self
    }

    /// Replaces the error list.
    #[must_use]
    pub fn with_errors<I>(mut self, errors: I) -> Self
    where
        I: IntoIterator,
        I::Item: Serialize,
    {
        self.errors = to_json_list(errors);
        self
    }

    /// Overrides the status code. Any value is accepted.
    #[must_use]
    pub fn with_status(mut self, http_status: u16) -> Self {
        self.status = http_status;
        self
    }

    /// Merges custom headers; entries with the same name are overwritten.
    #[must_use]
    pub fn with_headers<I, K, V>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.headers.merge(headers);
        self
    }

    /// Sets a single custom header.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Replaces the serialization options.
    #[must_use]
    pub fn with_serialization_options(mut self, options: SerializationOptions) -> Self {
        self.options = options;
        self
    }

    /// Enables or disables validation of the status and headers at send time.
    #[must_use]
    pub fn strict(mut self, enabled: bool) -> Self {
        self.strict = enabled;
        self
    }

    /// Whether the envelope is marked successful.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Current message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Current payload, or `None` if it could not be converted to JSON.
    #[must_use]
    pub fn data(&self) -> Option<&Value> {
        self.data.as_ref().ok()
    }

    /// Current error list, or `None` if it could not be converted to JSON.
    #[must_use]
    pub fn errors(&self) -> Option<&[Value]> {
        self.errors.as_deref().ok()
    }

    /// Current status code.
    #[must_use]
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Custom headers in insertion order.
    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Current serialization options.
    #[must_use]
    pub fn serialization_options(&self) -> &SerializationOptions {
        &self.options
    }

    /// Whether strict validation is enabled.
    #[must_use]
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Assembles the envelope from the current state.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unserializable`] if `data` or `errors` could not be
    /// converted to JSON.
    pub fn envelope(&self) -> Result<ResponseEnvelope> {
        let data = self.data.clone().map_err(Error::Unserializable)?;
        let errors = self.errors.clone().map_err(Error::Unserializable)?;
        Ok(ResponseEnvelope {
            success: self.success,
            message: self.message.clone(),
            data,
            errors,
        })
    }

    /// Serializes the envelope with the current options.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `data` or `errors` hold a value with no JSON representation
    /// - The envelope nests deeper than the configured maximum depth
    pub fn render(&self) -> Result<Vec<u8>> {
        let data = self.data.as_ref().map_err(|e| Error::Unserializable(e.clone()))?;
        let errors = self
            .errors
            .as_deref()
            .map_err(|e| Error::Unserializable(e.clone()))?;

        // envelope object, then the errors array
        let errors_depth = 1 + errors.iter().map(options::depth).max().unwrap_or(0);
        let depth = 1 + options::depth(data).max(errors_depth);

        let envelope = EnvelopeRef {
            success: self.success,
            message: &self.message,
            data,
            errors,
        };
        self.options.to_vec_at_depth(&envelope, depth)
    }

    /// Checks the status code and headers.
    ///
    /// This runs automatically in strict mode; otherwise every value passes
    /// through unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The status is outside 100-599
    /// - A header name is not a valid token
    /// - A header value contains CR, LF or NUL
    pub fn validate(&self) -> Result<()> {
        if !status::is_valid(self.status) {
            return Err(Error::InvalidStatus(self.status));
        }
        for (name, value) in self.headers.iter() {
            if !headers::is_valid_name(name) {
                return Err(Error::InvalidHeader(format!("invalid name {name:?}")));
            }
            if !headers::is_valid_value(value) {
                return Err(Error::InvalidHeader(format!(
                    "invalid value for {name}"
                )));
            }
        }
        Ok(())
    }

    /// Renders the response and writes it to the sink.
    ///
    /// The body is rendered before anything is written, so the status sent
    /// is always final. If rendering fails the status becomes 500 and the
    /// body is the fixed fallback envelope; that failure is never returned.
    /// Sink calls happen in the order status, headers, body, end. A
    /// `Content-Type: application/json` header is added unless a
    /// `content-type` header (any case) was supplied.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Strict mode is on and [`validate`](Self::validate) fails; nothing is
    ///   written in that case
    /// - The sink fails to accept a write
    pub fn send<S: ResponseSink + ?Sized>(self, sink: &mut S) -> Result<Sent> {
        if self.strict {
            self.validate()?;
        }

        let (http_status, body, fallback) = match self.render() {
            Ok(body) => (self.status, body, false),
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    status = self.status,
                    "response body could not be serialized, sending fallback"
                );
                let body = FallbackEnvelope::new(err.to_string()).to_vec();
                (status::INTERNAL_SERVER_ERROR, body, true)
            }
        };

        sink.set_status(http_status)?;
        for (name, value) in self.headers.iter() {
            sink.add_header(name, value)?;
        }
        if !self.headers.has_content_type() {
            sink.add_header(CONTENT_TYPE, DEFAULT_CONTENT_TYPE)?;
        }
        sink.write_body(&body)?;
        sink.end()?;

        tracing::debug!(
            status = http_status,
            headers = self.headers.len(),
            bytes = body.len(),
            fallback,
            "response sent"
        );

        Ok(Sent {
            status: http_status,
            body_len: body.len(),
            fallback,
        })
    }
}
