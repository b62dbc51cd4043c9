// Rust guideline compliant 2026-10-16

//! Error types for the Replio core library.

use thiserror::Error;

/// Result type alias for Replio operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Replio operations.
///
/// Serialization failures of the envelope are recovered inside
/// [`ResponseBuilder::send`](crate::ResponseBuilder::send) and never reach the
/// caller; the variants here cover the sink, configuration and opt-in
/// validation.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred while writing to a sink or reading a file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// `data` or `errors` held a value with no JSON representation.
    #[error("Unserializable value: {0}")]
    Unserializable(String),

    /// The envelope nests deeper than the configured limit.
    #[error("Maximum stack depth exceeded (limit {limit})")]
    DepthExceeded {
        /// Configured maximum depth.
        limit: usize,
    },

    /// Status code outside 100-599, rejected in strict mode.
    #[error("Invalid status code: {0}")]
    InvalidStatus(u16),

    /// Header name or value rejected in strict mode.
    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    /// Configuration file or environment value is invalid.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}
