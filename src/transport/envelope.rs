//! Request building and envelope execution.
//!
//! [`WireTransport`] owns a clone of the shared HTTP client plus the
//! resolved hub base URL, and performs exactly one round trip per call:
//! build the request, send it, decode the envelope, check the status.

// ============================================================================
// Imports
// ============================================================================

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Method, Request};
use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::error::Result;
use crate::protocol::WireResponse;

// ============================================================================
// Constants
// ============================================================================

/// Content type the remote end documents for request bodies.
pub(crate) const CONTENT_TYPE_JSON: &str = "text/json; charset=UTF-8";

/// Accept header for responses.
pub(crate) const ACCEPT_JSON: &str = "text/json";

/// Session endpoint under the hub prefix.
pub(crate) const SESSION_ENDPOINT: &str = "/wd/hub/session";

// ============================================================================
// WireTransport
// ============================================================================

/// One-round-trip executor against the remote hub.
///
/// Cheap to construct per call: the HTTP client clone shares its
/// connection pool.
#[derive(Debug, Clone)]
pub struct WireTransport {
    /// Shared HTTP client.
    http: reqwest::Client,

    /// Resolved hub base URL.
    base_url: Url,
}

// ============================================================================
// WireTransport - Construction
// ============================================================================

impl WireTransport {
    /// Creates a transport over the given client and base URL.
    #[inline]
    #[must_use]
    pub fn new(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    /// Returns the hub base URL.
    #[inline]
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

// ============================================================================
// WireTransport - Execution
// ============================================================================

impl WireTransport {
    /// Executes a body-less operation.
    ///
    /// # Errors
    ///
    /// - [`Error::Url`](crate::Error::Url) on a malformed relative path
    /// - [`Error::Http`](crate::Error::Http) on transport failure
    /// - [`Error::Json`](crate::Error::Json) on a malformed envelope
    /// - [`Error::Wire`](crate::Error::Wire) on non-zero status
    pub async fn execute(&self, method: Method, path: &str) -> Result<WireResponse> {
        let request = self.build(method, path, None)?;
        self.dispatch(request).await
    }

    /// Executes an operation with a JSON body.
    ///
    /// # Errors
    ///
    /// As [`execute`](Self::execute), plus [`Error::Json`](crate::Error::Json)
    /// if the body cannot be encoded.
    pub async fn execute_json<B>(&self, method: Method, path: &str, body: &B) -> Result<WireResponse>
    where
        B: Serialize + ?Sized,
    {
        let bytes = serde_json::to_vec(body)?;
        let request = self.build(method, path, Some(bytes))?;
        self.dispatch(request).await
    }

    /// Resolves the path against the base URL and attaches headers and body.
    fn build(&self, method: Method, path: &str, body: Option<Vec<u8>>) -> Result<Request> {
        let url = self.base_url.join(path)?;

        let mut builder = self
            .http
            .request(method, url)
            .header(CONTENT_TYPE, CONTENT_TYPE_JSON)
            .header(ACCEPT, ACCEPT_JSON);

        if let Some(bytes) = body {
            builder = builder.body(bytes);
        }

        Ok(builder.build()?)
    }

    /// Sends the request and decodes the envelope.
    async fn dispatch(&self, request: Request) -> Result<WireResponse> {
        debug!(method = %request.method(), url = %request.url(), "Dispatching request");

        let response = self.http.execute(request).await?;
        let raw = response.bytes().await?;

        let envelope: WireResponse = serde_json::from_slice(&raw)?;
        debug!(
            session_id = %envelope.session_id,
            state = %envelope.state,
            status = envelope.status,
            "Envelope received"
        );

        envelope.check_status()?;
        Ok(envelope)
    }
}

// ============================================================================
// Tests
// ============================================================================
