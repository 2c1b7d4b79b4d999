//! The uniform response envelope.
//!
//! Every endpoint replies with the same wrapper:
//!
//! ```json
//! {"sessionId": "...", "state": "success", "status": 0, "value": ...}
//! ```
//!
//! `status == 0` is success; anything else is a protocol-defined error
//! category surfaced verbatim to the caller. The `value` payload is
//! opaque at this layer; callers decode it as a typed structure or as
//! raw string bytes, chosen at the call site.

// ============================================================================
// Imports
// ============================================================================

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{Error, Result};

// ============================================================================
// WireResponse
// ============================================================================

/// Decoded response envelope.
///
/// Decoded once per round trip and discarded; never persisted.
#[derive(Debug, Clone, Deserialize)]
pub struct WireResponse {
    /// Session the response belongs to. Empty on some error replies.
    #[serde(rename = "sessionId", default)]
    pub session_id: String,

    /// Human-readable state string, e.g. `success`.
    #[serde(default)]
    pub state: String,

    /// Protocol status code. Zero means success.
    #[serde(default)]
    pub status: i64,

    /// Operation-specific payload. Absent and `null` are equivalent.
    #[serde(default)]
    pub value: Option<Value>,
}

// ============================================================================
// WireResponse - Status
// ============================================================================

impl WireResponse {
    /// Returns `true` if the envelope reports success.
    #[inline]
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == 0
    }

    /// Fails with [`Error::Wire`] if the status is non-zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Wire`] carrying the envelope's state string and
    /// status code.
    pub fn check_status(&self) -> Result<()> {
        if self.status == 0 {
            Ok(())
        } else {
            Err(Error::wire(self.state.clone(), self.status))
        }
    }
}

// ============================================================================
// WireResponse - Value Decoding
// ============================================================================

impl WireResponse {
    /// Returns the raw value payload, treating `null` as absent.
    #[inline]
    #[must_use]
    pub fn value(&self) -> Option<&Value> {
        match &self.value {
            Some(Value::Null) | None => None,
            Some(value) => Some(value),
        }
    }

    /// Decodes the value payload into a typed structure.
    ///
    /// Returns `Ok(None)` when the payload is absent, leaving the
    /// caller's state untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if the payload does not match `T`.
    pub fn decode_value<T: DeserializeOwned>(&self) -> Result<Option<T>> {
        match self.value() {
            None => Ok(None),
            Some(value) => Ok(Some(T::deserialize(value)?)),
        }
    }

    /// Decodes the value payload as a single JSON string and returns its
    /// bytes verbatim.
    ///
    /// Used for page source and for the screenshot payload, which stays
    /// base64-encoded at this layer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if the payload is not a JSON string.
    pub fn value_as_bytes(&self) -> Result<Option<Vec<u8>>> {
        match self.value() {
            None => Ok(None),
            Some(value) => {
                let text = String::deserialize(value)?;
                Ok(Some(text.into_bytes()))
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
