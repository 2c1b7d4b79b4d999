//! Core driver implementation.
//!
//! The [`Driver`] owns the shared HTTP client, the desired capability
//! set, and (after [`Driver::connect`]) the resolved hub base URL. It
//! opens sessions; it does not track them. The caller holds each
//! [`Session`] it receives.
//!
//! # Example
//!
//! ```no_run
//! use jsonwire_webdriver::{Capabilities, Driver};
//!
//! # async fn example() -> jsonwire_webdriver::Result<()> {
//! let driver = Driver::new(Capabilities::new().browser_name("phantomjs"));
//! let session = driver.connect("http://127.0.0.1:4444").await?;
//! println!("session id: {}", session.session_id());
//! # Ok(())
//! # }
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use reqwest::Method;
use tracing::info;
use url::Url;

use crate::capabilities::Capabilities;
use crate::error::{Error, Result};
use crate::identifiers::SessionId;
use crate::protocol::NewSessionRequest;
use crate::session::{Session, SessionProperties};
use crate::transport::WireTransport;
use crate::transport::envelope::SESSION_ENDPOINT;

use super::builder::DriverBuilder;

// ============================================================================
// Types
// ============================================================================

/// Internal shared state for the driver.
pub(crate) struct DriverInner {
    /// Shared HTTP client.
    pub http: reqwest::Client,

    /// Desired capabilities sent at session creation.
    pub capabilities: Capabilities,

    /// Hub base URL. Absent until `connect`; reconnecting overwrites it.
    pub base_url: Mutex<Option<Url>>,
}

// ============================================================================
// Driver
// ============================================================================

/// Remote-hub client and session factory.
///
/// The driver is responsible for:
/// - Holding the shared HTTP client and capability set
/// - Resolving and storing the hub base URL
/// - Opening sessions against the hub
///
/// Cloning is cheap and clones share state; concurrent sessions come
/// from separate `connect` calls, one [`Session`] per caller.
#[derive(Clone)]
pub struct Driver {
    /// Shared inner state.
    pub(crate) inner: Arc<DriverInner>,
}

// ============================================================================
// Driver - Display
// ============================================================================

impl fmt::Debug for Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Driver")
            .field("capabilities", &self.inner.capabilities.len())
            .field("base_url", &*self.inner.base_url.lock())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Driver - Public API
// ============================================================================

impl Driver {
    /// Creates a driver with the given capabilities and a default HTTP
    /// client. Always succeeds; the hub base URL comes later via
    /// [`connect`](Self::connect).
    #[inline]
    #[must_use]
    pub fn new(capabilities: Capabilities) -> Self {
        Self::builder().capabilities(capabilities).build()
    }

    /// Creates a configuration builder for the driver.
    #[inline]
    #[must_use]
    pub fn builder() -> DriverBuilder {
        DriverBuilder::new()
    }

    /// Returns the desired capability set.
    #[inline]
    #[must_use]
    pub fn capabilities(&self) -> &Capabilities {
        &self.inner.capabilities
    }

    /// Returns the hub base URL, if connected.
    #[inline]
    #[must_use]
    pub fn base_url(&self) -> Option<Url> {
        self.inner.base_url.lock().clone()
    }

    /// Opens a session against the hub at `base_url`.
    ///
    /// Parses and stores the base URL (a reconnect overwrites the
    /// previous one), posts the desired capabilities, and returns a
    /// [`Session`] carrying the server-assigned ID and the negotiated
    /// properties from the response value.
    ///
    /// # Errors
    ///
    /// - [`Error::Url`] if `base_url` is malformed
    /// - [`Error::Http`] if the hub is unreachable
    /// - [`Error::Json`] if the envelope or its value is malformed
    /// - [`Error::Wire`] if the hub refuses the session
    pub async fn connect(&self, base_url: &str) -> Result<Session> {
        let parsed = Url::parse(base_url)?;
        info!(url = %parsed, "Connecting to WebDriver hub");
        *self.inner.base_url.lock() = Some(parsed);

        let body = NewSessionRequest::new(&self.inner.capabilities);
        let envelope = self
            .transport()?
            .execute_json(Method::POST, SESSION_ENDPOINT, &body)
            .await?;

        let session_id = SessionId::from(envelope.session_id.clone());
        let properties = envelope
            .decode_value::<SessionProperties>()?
            .unwrap_or_default();

        info!(
            session_id = %session_id,
            browser = %properties.browser_name,
            "Session established"
        );

        Ok(Session::new(self.clone(), session_id, properties))
    }
}

// ============================================================================
// Driver - Internal API
// ============================================================================

impl Driver {
    /// Assembles a driver from its parts.
    pub(crate) fn from_parts(http: reqwest::Client, capabilities: Capabilities) -> Self {
        Self {
            inner: Arc::new(DriverInner {
                http,
                capabilities,
                base_url: Mutex::new(None),
            }),
        }
    }

    /// Builds a transport over the current base URL.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if `connect` has not stored a base URL.
    pub(crate) fn transport(&self) -> Result<WireTransport> {
        let base_url = self
            .inner
            .base_url
            .lock()
            .clone()
            .ok_or_else(|| Error::config("driver is not connected; call connect() first"))?;

        Ok(WireTransport::new(self.inner.http.clone(), base_url))
    }
}

// ============================================================================
// Tests
// ============================================================================
