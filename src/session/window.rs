//! Window sizing.

// ============================================================================
// Imports
// ============================================================================

use reqwest::Method;
use tracing::debug;

use crate::error::Result;
use crate::protocol::WindowSizeRequest;

use super::Session;

// ============================================================================
// Session - Window
// ============================================================================

impl Session {
    /// Resizes the current window.
    ///
    /// # Arguments
    ///
    /// * `width` - New width in pixels
    /// * `height` - New height in pixels
    ///
    /// # Errors
    ///
    /// Returns the transport or wire error of the round trip.
    pub async fn set_window_size(&mut self, width: u32, height: u32) -> Result<()> {
        debug!(session_id = %self.session_id(), width, height, "Resizing window");

        let body = WindowSizeRequest { width, height };
        let envelope = self
            .driver()
            .transport()?
            .execute_json(Method::POST, &self.path("/window/current/size"), &body)
            .await?;

        self.absorb(&envelope)
    }
}

// ============================================================================
// Tests
// ============================================================================
