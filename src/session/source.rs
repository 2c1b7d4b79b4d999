//! Page source retrieval.

// ============================================================================
// Imports
// ============================================================================

use std::io::{Cursor, Read};

use reqwest::Method;
use tracing::debug;

use crate::error::Result;

use super::Session;

// ============================================================================
// PageSource
// ============================================================================

/// Raw page source as a readable byte stream.
///
/// The bytes are exactly what the remote end returned for the page,
/// with no further decoding.
#[derive(Debug)]
pub struct PageSource {
    inner: Cursor<Vec<u8>>,
}

impl PageSource {
    /// Wraps the raw source bytes.
    pub(crate) fn new(bytes: Vec<u8>) -> Self {
        Self {
            inner: Cursor::new(bytes),
        }
    }

    /// Returns the remaining source as bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.inner.into_inner()
    }

    /// Returns the source as a string, replacing invalid UTF-8.
    #[must_use]
    pub fn into_string(self) -> String {
        String::from_utf8_lossy(&self.inner.into_inner()).into_owned()
    }
}

impl Read for PageSource {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.inner.read(buf)
    }
}

// ============================================================================
// Session - Source
// ============================================================================

impl Session {
    /// Gets the page source as a readable byte stream.
    ///
    /// # Errors
    ///
    /// Returns the transport or wire error of the round trip, or a
    /// serialization error if the payload is not a JSON string.
    pub async fn source(&self) -> Result<PageSource> {
        debug!(session_id = %self.session_id(), "Getting page source");

        let envelope = self
            .driver()
            .transport()?
            .execute(Method::GET, &self.path("/source"))
            .await?;

        let bytes = envelope.value_as_bytes()?.unwrap_or_default();
        Ok(PageSource::new(bytes))
    }
}

// ============================================================================
// Tests
// ============================================================================
