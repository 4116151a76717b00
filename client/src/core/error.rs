//! # Common Error Types
//!
//! Consolidated error handling for the client.
//!
//! Every failure a page can see is an [`AppError`]. The variants follow the
//! four classes of failure the client distinguishes, plus local concerns:
//!
//! - **Validation**: caught before any network call
//! - **Unauthorized**: the backend answered 401; the session is already cleared
//! - **Forbidden**: the cached user lacks the role a page needs
//! - **Api**: any other non-success status, with the backend's own message
//! - **Network**: the request never got a response (DNS, refused, timeout)
//! - **Parse / Storage / Config**: malformed payloads and local plumbing
//!
//! ## Usage Pattern
//!
//! ```rust
//! use client::core::error::{AppError, Result};
//!
//! fn validate_amount(amount: f64) -> Result<f64> {
//!     if amount <= 0.0 {
//!         return Err(AppError::Validation("Invalid withdrawal amount".to_string()));
//!     }
//!     Ok(amount)
//! }
//!
//! assert!(validate_amount(-1.0).is_err());
//! ```
//!
//! ## Display
//!
//! The four request-facing variants display exactly their message, so the
//! text shown in a page's error banner is the backend's text verbatim.

use thiserror::Error;

/// Client-wide error type.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AppError {
    /// Input rejected before any request was made.
    ///
    /// ```rust
    /// use client::core::error::AppError;
    ///
    /// let err = AppError::Validation("Email is required".to_string());
    /// assert_eq!(err.to_string(), "Email is required");
    /// ```
    #[error("{0}")]
    Validation(String),

    /// The backend rejected the credential (HTTP 401).
    ///
    /// By the time a caller sees this, the token store has been cleared and
    /// a login-required event published.
    #[error("{0}")]
    Unauthorized(String),

    /// The signed-in user lacks the role the page requires. The session is
    /// left intact.
    #[error("{0}")]
    Forbidden(String),

    /// The backend answered with a non-success status other than 401.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The request did not reach the backend. The message names the
    /// configured origin to help diagnose local setups.
    #[error("{0}")]
    Network(String),

    /// A payload could not be encoded, or a success payload did not match
    /// the expected shape.
    #[error("{0}")]
    Parse(String),

    /// Local persistence failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Client configuration is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Whether the session was invalidated by this failure.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, AppError::Unauthorized(_))
    }

    pub fn is_forbidden(&self) -> bool {
        matches!(self, AppError::Forbidden(_))
    }

    /// HTTP status carried by the failure, when there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Unauthorized(_) => Some(401),
            AppError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<lib_utils::envs::Error> for AppError {
    fn from(err: lib_utils::envs::Error) -> Self {
        AppError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_errors_display_message_verbatim() {
        assert_eq!(AppError::Unauthorized("expired".to_string()).to_string(), "expired");
        assert_eq!(
            AppError::Api { status: 400, message: "Insufficient balance".to_string() }.to_string(),
            "Insufficient balance"
        );
        assert_eq!(AppError::Network("connection refused".to_string()).to_string(), "connection refused");
    }

    #[test]
    fn test_status() {
        assert_eq!(AppError::Unauthorized("x".to_string()).status(), Some(401));
        assert_eq!(AppError::Api { status: 503, message: "x".to_string() }.status(), Some(503));
        assert_eq!(AppError::Validation("x".to_string()).status(), None);
        assert!(AppError::Unauthorized("x".to_string()).is_unauthorized());
        assert_eq!(AppError::Forbidden("x".to_string()).status(), None);
        assert!(AppError::Forbidden("x".to_string()).is_forbidden());
        assert!(!AppError::Forbidden("x".to_string()).is_unauthorized());
    }
}
