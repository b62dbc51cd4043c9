// Rust guideline compliant 2026-10-16

//! HTTP status codes commonly used with response envelopes.
//!
//! These are conventions only: the builder accepts any `u16` and passes it
//! through unchanged unless strict validation is enabled.

/// 200 OK, the default for successful responses.
pub const OK: u16 = 200;
/// 201 Created.
pub const CREATED: u16 = 201;
/// 204 No Content.
pub const NO_CONTENT: u16 = 204;
/// 400 Bad Request, the default for error responses.
pub const BAD_REQUEST: u16 = 400;
/// 401 Unauthorized.
pub const UNAUTHORIZED: u16 = 401;
/// 403 Forbidden.
pub const FORBIDDEN: u16 = 403;
/// 404 Not Found.
pub const NOT_FOUND: u16 = 404;
/// 409 Conflict.
pub const CONFLICT: u16 = 409;
/// 422 Unprocessable Entity.
pub const UNPROCESSABLE_ENTITY: u16 = 422;
/// 500 Internal Server Error, used when the body cannot be serialized.
pub const INTERNAL_SERVER_ERROR: u16 = 500;
/// 503 Service Unavailable.
pub const SERVICE_UNAVAILABLE: u16 = 503;

/// Returns the canonical reason phrase for a status code, if known.
#[must_use]
pub fn reason_phrase(code: u16) -> Option<&'static str> {
    let phrase = match code {
        100 => "Continue",
        101 => "Switching Protocols",
        200 => "OK",
        201 => "Created",
        202 => "Accepted",
        204 => "No Content",
        301 => "Moved Permanently",
        302 => "Found",
        304 => "Not Modified",
        307 => "Temporary Redirect",
        308 => "Permanent Redirect",
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        405 => "Method Not Allowed",
        409 => "Conflict",
        410 => "Gone",
        415 => "Unsupported Media Type",
        422 => "Unprocessable Entity",
        429 => "Too Many Requests",
        500 => "Internal Server Error",
        501 => "Not Implemented",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        504 => "Gateway Timeout",
        _ => return None,
    };
    Some(phrase)
}

/// Returns whether the code is a three-digit HTTP status (100-599).
#[must_use]
pub fn is_valid(code: u16) -> bool {
    (100..=599).contains(&code)
}
