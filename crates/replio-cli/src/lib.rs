// Rust guideline compliant 2026-10-16

//! Replio CLI library.
//!
//! This library exposes the CLI modules for use in tests and external code.

pub mod compose;
pub mod logging;

pub use compose::{compose, parse_header, parse_value, Composition, Outcome};
pub use logging::{init_tracing, parse_log_level, LoggingError};
