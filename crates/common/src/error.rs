//! Common error types shared across crates.

use thiserror::Error;

/// Top-level service error type.
///
/// Variants map to HTTP status codes returned to callers:
/// - [`ServiceError::BadRequest`] → 400
/// - [`ServiceError::AuthenticationFailed`] → 400
/// - [`ServiceError::NotFound`] → 404
/// - [`ServiceError::Internal`] → 500
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The request or stored record is malformed. The message names the field
    /// and is safe to return.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The record cannot be opened with the configured key. Never carries detail.
    #[error("record cannot be opened with this key")]
    AuthenticationFailed,

    /// No record exists under the requested id.
    #[error("not found: {0}")]
    NotFound(String),

    /// An unexpected internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    /// Returns the HTTP status code that should be sent for this error.
    pub fn http_status(&self) -> u16 {
        match self {
            ServiceError::BadRequest(_) => 400,
            ServiceError::AuthenticationFailed => 400,
            ServiceError::NotFound(_) => 404,
            ServiceError::Internal(_) => 500,
        }
    }

    /// Returns the machine-readable code placed in the error response body.
    pub fn code(&self) -> &'static str {
        match self {
            ServiceError::BadRequest(_) => "bad_request",
            ServiceError::AuthenticationFailed => "authentication_failed",
            ServiceError::NotFound(_) => "not_found",
            ServiceError::Internal(_) => "internal_error",
        }
    }

    /// Returns the message safe to expose to callers.
    ///
    /// Internal details stay in logs.
    pub fn public_message(&self) -> String {
        match self {
            ServiceError::Internal(_) => "internal error".into(),
            other => other.to_string(),
        }
    }
}
