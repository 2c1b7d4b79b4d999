//! Builder pattern for driver configuration.
//!
//! Provides a fluent API for configuring and creating [`Driver`] instances.
//! Building never fails: an unset capability set is the valid empty set,
//! and an unset HTTP client falls back to the default.
//!
//! # Example
//!
//! ```
//! use jsonwire_webdriver::{Capabilities, Driver};
//!
//! let driver = Driver::builder()
//!     .capabilities(Capabilities::new().browser_name("phantomjs"))
//!     .build();
//! ```

// ============================================================================
// Imports
// ============================================================================

use crate::capabilities::Capabilities;

use super::core::Driver;

// ============================================================================
// DriverBuilder
// ============================================================================

/// Builder for configuring a [`Driver`] instance.
///
/// Use [`Driver::builder()`] to create a new builder. The HTTP client is
/// injectable so tests can point the driver at a stub server without
/// process-wide state.
#[derive(Debug, Default, Clone)]
pub struct DriverBuilder {
    /// Desired capabilities for session creation.
    capabilities: Capabilities,

    /// Injected HTTP client; defaults when unset.
    http: Option<reqwest::Client>,
}

// ============================================================================
// DriverBuilder Implementation
// ============================================================================

impl DriverBuilder {
    /// Creates a new driver builder with no configuration.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the desired capability set.
    #[inline]
    #[must_use]
    pub fn capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    /// Injects a preconfigured HTTP client.
    ///
    /// Timeouts and connection reuse are whatever the client was built
    /// with; the driver adds no policy of its own.
    #[inline]
    #[must_use]
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Builds the driver.
    ///
    /// Always succeeds. The hub base URL is supplied later via
    /// [`Driver::connect`].
    #[must_use]
    pub fn build(self) -> Driver {
        let http = self.http.unwrap_or_default();
        Driver::from_parts(http, self.capabilities)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_creates_empty_builder() {
        let builder = DriverBuilder::new();
        assert!(builder.capabilities.is_empty());
        assert!(builder.http.is_none());
    }

    #[test]
    fn test_capabilities_set() {
        let caps = Capabilities::new().browser_name("phantomjs");
        let builder = DriverBuilder::new().capabilities(caps.clone());
        assert_eq!(builder.capabilities, caps);
    }

    #[test]
    fn test_build_with_defaults() {
        let driver = DriverBuilder::new().build();
        assert!(driver.capabilities().is_empty());
        assert!(driver.base_url().is_none());
    }

    #[test]
    fn test_build_with_injected_client() {
        let client = reqwest::Client::new();
        let driver = DriverBuilder::new().http_client(client).build();
        assert!(driver.base_url().is_none());
    }

    #[test]
    fn test_builder_is_clone() {
        let builder = DriverBuilder::new().capabilities(Capabilities::new().platform("ANY"));
        let cloned = builder.clone();
        assert_eq!(builder.capabilities, cloned.capabilities);
    }
}
