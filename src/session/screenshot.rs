//! Screenshot capture.
//!
//! The remote end returns screenshots as the base64 encoding of a PNG,
//! delivered as the envelope's string value. The transport layer hands
//! that text over un-decoded; [`Screenshot`] wraps it in a streaming
//! base64 decoder so the caller reads PNG bytes without materializing an
//! intermediate buffer. Malformed base64 therefore surfaces as an
//! [`std::io::Error`] while reading, not at call time.

// ============================================================================
// Imports
// ============================================================================

use std::io::{Cursor, Read};
use std::path::Path;

use base64::engine::general_purpose::{GeneralPurpose, STANDARD};
use base64::read::DecoderReader;
use reqwest::Method;
use tracing::debug;

use crate::error::Result;

use super::Session;

// ============================================================================
// Screenshot
// ============================================================================

/// A PNG screenshot as a lazily-decoded byte stream.
///
/// # Example
///
/// ```ignore
/// let screenshot = session.screenshot().await?;
/// screenshot.save("page.png")?;
/// ```
pub struct Screenshot {
    decoder: DecoderReader<'static, GeneralPurpose, Cursor<Vec<u8>>>,
}

impl Screenshot {
    /// Wraps the still-encoded base64 text.
    pub(crate) fn new(encoded: Vec<u8>) -> Self {
        Self {
            decoder: DecoderReader::new(Cursor::new(encoded), &STANDARD),
        }
    }

    /// Reads the stream to the end and returns the decoded PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) if the payload is not
    /// valid base64.
    pub fn bytes(mut self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        self.decoder.read_to_end(&mut bytes)?;
        Ok(bytes)
    }

    /// Decodes the stream and writes the PNG to a file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) on malformed base64 or a
    /// failed write.
    pub fn save(self, path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.bytes()?;
        std::fs::write(path.as_ref(), bytes)?;
        Ok(())
    }
}

impl Read for Screenshot {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.decoder.read(buf)
    }
}

impl std::fmt::Debug for Screenshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Screenshot").finish_non_exhaustive()
    }
}

// ============================================================================
// Session - Screenshot
// ============================================================================

impl Session {
    /// Captures a screenshot of the current page.
    ///
    /// # Errors
    ///
    /// Returns the transport or wire error of the round trip, or a
    /// serialization error if the payload is not a JSON string. Base64
    /// errors surface later, as the returned stream is read.
    pub async fn screenshot(&self) -> Result<Screenshot> {
        debug!(session_id = %self.session_id(), "Capturing screenshot");

        let envelope = self
            .driver()
            .transport()?
            .execute(Method::GET, &self.path("/screenshot"))
            .await?;

        let encoded = envelope.value_as_bytes()?.unwrap_or_default();
        Ok(Screenshot::new(encoded))
    }
}

// ============================================================================
// Tests
// ============================================================================
