//! Navigation and inspection operations.

// ============================================================================
// Imports
// ============================================================================

use reqwest::Method;
use tracing::debug;

use crate::error::Result;
use crate::protocol::NavigateRequest;

use super::Session;

// ============================================================================
// Session - Navigation
// ============================================================================

impl Session {
    /// Navigates to a URL.
    ///
    /// # Arguments
    ///
    /// * `url` - The URL to navigate to
    ///
    /// # Errors
    ///
    /// Returns an error if navigation fails.
    pub async fn set_url(&mut self, url: &str) -> Result<()> {
        debug!(session_id = %self.session_id(), url = %url, "Navigating");

        let body = NavigateRequest { url };
        let envelope = self
            .driver()
            .transport()?
            .execute_json(Method::POST, &self.path("/url"), &body)
            .await?;

        self.absorb(&envelope)
    }

    /// Gets the current URL.
    pub async fn url(&self) -> Result<String> {
        debug!(session_id = %self.session_id(), "Getting page URL");

        let envelope = self
            .driver()
            .transport()?
            .execute(Method::GET, &self.path("/url"))
            .await?;

        Ok(envelope.decode_value::<String>()?.unwrap_or_default())
    }

    /// Gets the current page title.
    pub async fn title(&self) -> Result<String> {
        debug!(session_id = %self.session_id(), "Getting page title");

        let envelope = self
            .driver()
            .transport()?
            .execute(Method::GET, &self.path("/title"))
            .await?;

        Ok(envelope.decode_value::<String>()?.unwrap_or_default())
    }

    /// Navigates back in history.
    pub async fn back(&self) -> Result<()> {
        debug!(session_id = %self.session_id(), "Navigating back");

        self.driver()
            .transport()?
            .execute(Method::POST, &self.path("/back"))
            .await?;

        Ok(())
    }

    /// Navigates forward in history.
    pub async fn forward(&mut self) -> Result<()> {
        debug!(session_id = %self.session_id(), "Navigating forward");

        let envelope = self
            .driver()
            .transport()?
            .execute(Method::POST, &self.path("/forward"))
            .await?;

        self.absorb(&envelope)
    }

    /// Reloads the current page.
    pub async fn refresh(&mut self) -> Result<()> {
        debug!(session_id = %self.session_id(), "Reloading page");

        let envelope = self
            .driver()
            .transport()?
            .execute(Method::POST, &self.path("/refresh"))
            .await?;

        self.absorb(&envelope)
    }
}

// ============================================================================
// Tests
// ============================================================================
