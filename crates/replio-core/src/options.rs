// Rust guideline compliant 2026-10-16

//! Formatting flags applied when the envelope is serialized.
//!
//! Options only change how the JSON text looks, never what it means: every
//! combination parses back to the same value.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use serde_json::{Serializer, Value};
use std::fmt::Write as _;

/// Nesting limit applied when none is configured.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Serialization options for the response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SerializationOptions {
    /// Indent with four spaces and put each member on its own line.
    pub pretty_print: bool,

    /// Emit `/` as `\/`.
    pub escape_slashes: bool,

    /// Emit non-ASCII characters as `\uXXXX` escapes.
    pub escape_unicode: bool,

    /// Maximum nesting depth of the whole envelope.
    pub max_depth: usize,
}

impl Default for SerializationOptions {
    fn default() -> Self {
        Self {
            pretty_print: false,
            escape_slashes: false,
            escape_unicode: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl SerializationOptions {
    /// Default options with pretty printing turned on.
    #[must_use]
    pub fn pretty() -> Self {
        Self {
            pretty_print: true,
            ..Self::default()
        }
    }

    /// Serializes a value according to these options.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The value nests deeper than `max_depth`
    /// - serde_json fails to write the value
    pub fn to_vec(&self, value: &Value) -> Result<Vec<u8>> {
        self.to_vec_at_depth(value, depth(value))
    }

    /// Serializes any value whose nesting depth the caller already knows.
    pub(crate) fn to_vec_at_depth<T: Serialize + ?Sized>(
        &self,
        value: &T,
        depth: usize,
    ) -> Result<Vec<u8>> {
        if depth > self.max_depth {
            return Err(Error::DepthExceeded {
                limit: self.max_depth,
            });
        }

        let mut buf = Vec::with_capacity(128);
        if self.pretty_print {
            let formatter = PrettyFormatter::with_indent(b"    ");
            let mut ser = Serializer::with_formatter(&mut buf, formatter);
            value.serialize(&mut ser)?;
        } else {
            serde_json::to_writer(&mut buf, value)?;
        }

        if !self.escape_slashes && !self.escape_unicode {
            return Ok(buf);
        }

        // serde_json only ever produces UTF-8
        Ok(self.escape(&String::from_utf8_lossy(&buf)).into_bytes())
    }

    // '/' and non-ASCII characters can only occur inside JSON strings, so a
    // plain character pass is enough.
    fn escape(&self, json: &str) -> String {
        let mut out = String::with_capacity(json.len() + 16);
        for ch in json.chars() {
            if ch == '/' && self.escape_slashes {
                out.push_str("\\/");
            } else if !ch.is_ascii() && self.escape_unicode {
                let mut units = [0u16; 2];
                for unit in ch.encode_utf16(&mut units) {
                    // writing to a String cannot fail
                    let _ = write!(out, "\\u{unit:04x}");
                }
            } else {
                out.push(ch);
            }
        }
        out
    }
}

/// Nesting depth of a JSON value: scalars are 0, each array or object adds 1.
#[must_use]
pub fn depth(value: &Value) -> usize {
    let mut max = 0;
    let mut stack = vec![(value, 0usize)];
    while let Some((current, level)) = stack.pop() {
        match current {
            Value::Array(items) => {
                max = max.max(level + 1);
                stack.extend(items.iter().map(|item| (item, level + 1)));
            }
            Value::Object(map) => {
                max = max.max(level + 1);
                stack.extend(map.values().map(|item| (item, level + 1)));
            }
            _ => {}
        }
    }
    max
}
