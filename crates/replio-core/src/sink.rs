// Rust guideline compliant 2026-10-16

//! Output sinks that receive a finished response.
//!
//! The builder never talks to a transport directly. It hands the final
//! status, headers and body to a [`ResponseSink`] in the order
//! status → headers → body → end.

use crate::status;
use serde_json::Value;
use std::io::{self, Write};

/// Response-emission capability supplied by the HTTP layer.
pub trait ResponseSink {
    /// Sets the outgoing status code.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying transport rejects the write.
    fn set_status(&mut self, status: u16) -> io::Result<()>;

    /// Adds one outgoing header line.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying transport rejects the write.
    fn add_header(&mut self, name: &str, value: &str) -> io::Result<()>;

    /// Writes raw bytes as the response body.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying transport rejects the write.
    fn write_body(&mut self, body: &[u8]) -> io::Result<()>;

    /// Ends the response. No writes are accepted afterwards.
    ///
    /// # Errors
    ///
    /// Returns an error if flushing the transport fails.
    fn end(&mut self) -> io::Result<()>;
}

fn ended_error() -> io::Error {
    io::Error::new(io::ErrorKind::Other, "response already ended")
}

/// One primitive call recorded by [`CapturedResponse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkCall {
    /// `set_status` was called.
    Status(u16),
    /// `add_header` was called.
    Header(String, String),
    /// `write_body` was called with this many bytes.
    Body(usize),
    /// `end` was called.
    End,
}

/// In-memory sink that records everything it receives.
#[derive(Debug, Clone, Default)]
pub struct CapturedResponse {
    /// Last status set, if any.
    pub status: Option<u16>,
    /// Headers in emission order.
    pub headers: Vec<(String, String)>,
    /// Concatenated body bytes.
    pub body: Vec<u8>,
    /// Whether `end` was called.
    pub ended: bool,
    /// Every primitive call in order.
    pub calls: Vec<SinkCall>,
}

impl CapturedResponse {
    /// Creates an empty capture.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the first header value whose name matches, ignoring case.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Counts headers whose name matches, ignoring case.
    #[must_use]
    pub fn header_count(&self, name: &str) -> usize {
        self.headers
            .iter()
            .filter(|(existing, _)| existing.eq_ignore_ascii_case(name))
            .count()
    }

    /// Body as UTF-8 text, with invalid sequences replaced.
    #[must_use]
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Parses the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the body is not valid JSON.
    pub fn body_json(&self) -> serde_json::Result<Value> {
        serde_json::from_slice(&self.body)
    }
}

impl ResponseSink for CapturedResponse {
    fn set_status(&mut self, status: u16) -> io::Result<()> {
        if self.ended {
            return Err(ended_error());
        }
        self.status = Some(status);
        self.calls.push(SinkCall::Status(status));
        Ok(())
    }

    fn add_header(&mut self, name: &str, value: &str) -> io::Result<()> {
        if self.ended {
            return Err(ended_error());
        }
        self.headers.push((name.to_string(), value.to_string()));
        self.calls
            .push(SinkCall::Header(name.to_string(), value.to_string()));
        Ok(())
    }

    fn write_body(&mut self, body: &[u8]) -> io::Result<()> {
        if self.ended {
            return Err(ended_error());
        }
        self.body.extend_from_slice(body);
        self.calls.push(SinkCall::Body(body.len()));
        Ok(())
    }

    fn end(&mut self) -> io::Result<()> {
        if self.ended {
            return Err(ended_error());
        }
        self.ended = true;
        self.calls.push(SinkCall::End);
        Ok(())
    }
}

/// Sink that writes a raw HTTP/1.1 response to any writer.
///
/// The status line, headers and body are buffered and written together on
/// [`end`](ResponseSink::end), so `Content-Length` covers every body chunk.
/// It is added unless the caller supplied one.
pub struct Http1Writer<W: Write> {
    writer: W,
    head: Vec<u8>,
    body: Vec<u8>,
    has_content_length: bool,
    body_started: bool,
    ended: bool,
}

impl<W: Write> Http1Writer<W> {
    /// Wraps a writer. The status defaults to 200 if never set.
    pub fn new(writer: W) -> Self {
        let mut sink = Self {
            writer,
            head: Vec::with_capacity(512),
            body: Vec::new(),
            has_content_length: false,
            body_started: false,
            ended: false,
        };
        sink.write_status_line(status::OK);
        sink
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_status_line(&mut self, code: u16) {
        self.head.clear();
        self.has_content_length = false;
        self.head.extend(b"HTTP/1.1 ");
        self.head.extend(code.to_string().as_bytes());
        self.head.extend(b" ");
        self.head
            .extend(status::reason_phrase(code).unwrap_or("").as_bytes());
        self.head.extend(b"\r\n");
    }

    fn check_head_open(&self, what: &str) -> io::Result<()> {
        self.check_open()?;
        if self.body_started {
            return Err(io::Error::new(
                io::ErrorKind::Other,
                format!("{what} after body"),
            ));
        }
        Ok(())
    }

    fn check_open(&self) -> io::Result<()> {
        if self.ended {
            Err(ended_error())
        } else {
            Ok(())
        }
    }
}

impl<W: Write> ResponseSink for Http1Writer<W> {
    fn set_status(&mut self, status: u16) -> io::Result<()> {
        self.check_head_open("status")?;
        // Headers set before the status are kept.
        let headers = self
            .head
            .iter()
            .position(|&b| b == b'\n')
            .map(|end| self.head.split_off(end + 1))
            .unwrap_or_default();
        let has_content_length = self.has_content_length;
        self.write_status_line(status);
        self.head.extend(headers);
        self.has_content_length = has_content_length;
        Ok(())
    }

    fn add_header(&mut self, name: &str, value: &str) -> io::Result<()> {
        self.check_head_open("header")?;
        if name.eq_ignore_ascii_case("content-length") {
            self.has_content_length = true;
        }
        self.head.extend(name.as_bytes());
        self.head.extend(b": ");
        self.head.extend(value.as_bytes());
        self.head.extend(b"\r\n");
        Ok(())
    }

    fn write_body(&mut self, body: &[u8]) -> io::Result<()> {
        self.check_open()?;
        self.body_started = true;
        self.body.extend_from_slice(body);
        Ok(())
    }

    fn end(&mut self) -> io::Result<()> {
        self.check_open()?;
        if !self.has_content_length {
            self.head.extend(b"Content-Length: ");
            self.head.extend(self.body.len().to_string().as_bytes());
            self.head.extend(b"\r\n");
        }
        self.head.extend(b"\r\n");
        self.ended = true;
        self.writer.write_all(&self.head)?;
        self.writer.write_all(&self.body)?;
        self.writer.flush()
    }
}
