//! Error types for the JSON Wire Protocol client.
//!
//! This module defines all error types used throughout the crate.
//!
//! # Usage
//!
//! All fallible operations return [`Result<T>`] which uses [`Error`]:
//!
//! ```ignore
//! use jsonwire_webdriver::{Result, Error};
//!
//! async fn example(session: &jsonwire_webdriver::Session) -> Result<()> {
//!     let title = session.title().await?;
//!     println!("{title}");
//!     Ok(())
//! }
//! ```
//!
//! # Error Categories
//!
//! | Category | Variants |
//! |----------|----------|
//! | Configuration | [`Error::Config`], [`Error::Url`] |
//! | Serialization | [`Error::Json`] |
//! | Transport | [`Error::Http`] |
//! | Protocol | [`Error::Wire`] |
//! | Stream | [`Error::Io`] |

// ============================================================================
// Imports
// ============================================================================

use std::io::Error as IoError;
use std::result::Result as StdResult;

use thiserror::Error;

// ============================================================================
// Result Alias
// ============================================================================

/// Result type alias using crate [`enum@Error`].
///
/// All fallible operations in this crate return this type.
pub type Result<T> = StdResult<T, Error>;

// ============================================================================
// Error Enum
// ============================================================================

/// Main error type for the crate.
///
/// The variants separate "we never talked to the server" failures
/// ([`Error::Http`]) from "the server refused the request" failures
/// ([`Error::Wire`]) so callers can branch on the distinction.
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Configuration error.
    ///
    /// Returned when the driver is used before it is configured,
    /// e.g. issuing a session operation before `connect`.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// Malformed base URL or relative path.
    ///
    /// Raised at request-build time, before anything is sent.
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    // ========================================================================
    // Serialization Errors
    // ========================================================================
    /// JSON serialization or deserialization error.
    ///
    /// Covers request bodies that cannot be encoded and response
    /// envelopes or values that cannot be decoded into the target shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ========================================================================
    // Transport Errors
    // ========================================================================
    /// HTTP transport failure.
    ///
    /// Connection refused, DNS failure, timeout. Propagated verbatim
    /// from the HTTP client, never retried.
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    // ========================================================================
    // Protocol Errors
    // ========================================================================
    /// The remote end replied with a non-zero status.
    ///
    /// Carries the server's state string and status code verbatim.
    #[error("{state} ({status})")]
    Wire {
        /// Human-readable state string from the response envelope.
        state: String,
        /// Protocol status code (non-zero).
        status: i64,
    },

    // ========================================================================
    // Stream Errors
    // ========================================================================
    /// IO error while consuming a byte stream.
    ///
    /// Surfaced by screenshot and page-source stream helpers.
    #[error("IO error: {0}")]
    Io(#[from] IoError),
}

// ============================================================================
// Error Constructors
// ============================================================================

impl Error {
    /// Creates a configuration error.
    #[inline]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Creates a protocol error from an envelope's state and status.
    #[inline]
    pub fn wire(state: impl Into<String>, status: i64) -> Self {
        Self::Wire {
            state: state.into(),
            status,
        }
    }
}

// ============================================================================
// Error Predicates
// ============================================================================

impl Error {
    /// Returns `true` if this is a configuration error.
    #[inline]
    #[must_use]
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config { .. } | Self::Url(_))
    }

    /// Returns `true` if this is a serialization error.
    #[inline]
    #[must_use]
    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Json(_))
    }

    /// Returns `true` if the HTTP round trip itself failed.
    #[inline]
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_))
    }

    /// Returns `true` if the server replied with a non-zero status.
    #[inline]
    #[must_use]
    pub fn is_wire(&self) -> bool {
        matches!(self, Self::Wire { .. })
    }

    /// Returns the protocol status code if this is a wire error.
    #[inline]
    #[must_use]
    pub fn wire_status(&self) -> Option<i64> {
        match self {
            Self::Wire { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the protocol state string if this is a wire error.
    #[inline]
    #[must_use]
    pub fn wire_state(&self) -> Option<&str> {
        match self {
            Self::Wire { state, .. } => Some(state),
            _ => None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::ErrorKind;

    #[test]
    fn test_config_error_display() {
        let err = Error::config("driver is not connected");
        assert_eq!(
            err.to_string(),
            "Configuration error: driver is not connected"
        );
    }

    #[test]
    fn test_wire_error_display() {
        let err = Error::wire("no such session", 6);
        assert_eq!(err.to_string(), "no such session (6)");
    }

    #[test]
    fn test_is_wire() {
        let wire_err = Error::wire("unknown command", 9);
        let config_err = Error::config("test");

        assert!(wire_err.is_wire());
        assert!(!config_err.is_wire());
    }

    #[test]
    fn test_wire_accessors() {
        let err = Error::wire("no such session", 6);
        assert_eq!(err.wire_status(), Some(6));
        assert_eq!(err.wire_state(), Some("no such session"));

        let other = Error::config("test");
        assert_eq!(other.wire_status(), None);
        assert_eq!(other.wire_state(), None);
    }

    #[test]
    fn test_is_config() {
        let config_err = Error::config("test");
        let url_err: Error = url::ParseError::EmptyHost.into();
        let wire_err = Error::wire("state", 13);

        assert!(config_err.is_config());
        assert!(url_err.is_config());
        assert!(!wire_err.is_config());
    }

    #[test]
    fn test_is_serialization() {
        let json_err: Error = serde_json::from_str::<String>("invalid")
            .unwrap_err()
            .into();
        assert!(json_err.is_serialization());
        assert!(!json_err.is_wire());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = IoError::new(ErrorKind::InvalidData, "bad base64");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_from_url_error() {
        let parse_err = url::Url::parse("not a url").unwrap_err();
        let err: Error = parse_err.into();
        assert!(matches!(err, Error::Url(_)));
    }
}
