//! Session lifecycle and negotiated properties.
//!
//! The remote end answers session creation with the capabilities it
//! actually provides. That snapshot lives on the [`Session`] and is
//! replaced whenever a mutating operation's envelope carries a fresh
//! value; operations that fail leave the pre-call snapshot authoritative.

// ============================================================================
// Imports
// ============================================================================

use reqwest::Method;
use serde::Deserialize;
use tracing::debug;

use crate::driver::Driver;
use crate::error::Result;
use crate::identifiers::SessionId;
use crate::protocol::WireResponse;
use crate::transport::envelope::SESSION_ENDPOINT;

// ============================================================================
// SessionProperties
// ============================================================================

/// Proxy settings the remote end reports for a session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProxyProperties {
    /// Proxy mode in effect, e.g. `direct`.
    #[serde(rename = "proxyType")]
    pub proxy_type: String,
}

/// Server-negotiated session properties.
///
/// The field set mirrors what JSON Wire hubs report at session creation.
/// Fields the hub omits stay at their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SessionProperties {
    /// Whether the session accepts untrusted TLS certificates.
    pub accept_ssl_certs: bool,

    /// Whether the application cache is available.
    pub application_cache_enabled: bool,

    /// Whether browser connectivity can be queried.
    pub browser_connection_enabled: bool,

    /// Negotiated browser name.
    pub browser_name: String,

    /// Whether CSS selectors are supported.
    pub css_selectors_enabled: bool,

    /// Whether database storage is available.
    pub database_enabled: bool,

    /// Driver name the hub reports.
    pub driver_name: String,

    /// Driver version the hub reports.
    pub driver_version: String,

    /// Whether alerts can be handled.
    pub handles_alerts: bool,

    /// Whether JavaScript execution is enabled.
    pub javascript_enabled: bool,

    /// Whether the geolocation context is available.
    pub location_context_enabled: bool,

    /// Whether native input events are used.
    pub native_events: bool,

    /// Negotiated platform string.
    pub platform: String,

    /// Proxy settings in effect.
    pub proxy: ProxyProperties,

    /// Whether the screen orientation can be rotated.
    pub rotatable: bool,

    /// Whether screenshots are supported.
    pub takes_screenshot: bool,

    /// Negotiated browser version.
    pub version: String,

    /// Whether web storage is available.
    pub web_storage_enabled: bool,
}

// ============================================================================
// Session
// ============================================================================

/// One live remote browser session.
///
/// Created by [`Driver::connect`], used for zero or more operations,
/// ended by [`close`](Session::close). After a close the server drops
/// the ID; any further operation is rejected by the remote end and
/// surfaces as a wire error.
///
/// Operations that refresh the snapshot take `&mut self`; a session is
/// therefore single-caller by construction. Concurrent automation means
/// one driver/session pair per remote session.
#[derive(Debug)]
pub struct Session {
    /// Back-reference used to build subsequent requests.
    driver: Driver,

    /// Server-assigned session ID.
    session_id: SessionId,

    /// Snapshot of negotiated properties.
    properties: SessionProperties,
}

// ============================================================================
// Session - Accessors
// ============================================================================

impl Session {
    /// Returns the server-assigned session ID.
    #[inline]
    #[must_use]
    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    /// Returns the current negotiated-property snapshot.
    #[inline]
    #[must_use]
    pub fn properties(&self) -> &SessionProperties {
        &self.properties
    }

    /// Returns the owning driver.
    #[inline]
    #[must_use]
    pub fn driver(&self) -> &Driver {
        &self.driver
    }
}

// ============================================================================
// Session - Lifecycle
// ============================================================================

impl Session {
    /// Ends the session.
    ///
    /// The server invalidates the ID; any later operation on this
    /// session is rejected remotely.
    ///
    /// # Errors
    ///
    /// Returns the transport or wire error of the round trip.
    pub async fn close(&mut self) -> Result<()> {
        debug!(session_id = %self.session_id, "Closing session");

        let envelope = self
            .driver
            .transport()?
            .execute(Method::DELETE, &self.path(""))
            .await?;

        self.absorb(&envelope)
    }
}

// ============================================================================
// Session - Internal API
// ============================================================================

impl Session {
    /// Assembles a session from the session-creation exchange.
    pub(crate) fn new(driver: Driver, session_id: SessionId, properties: SessionProperties) -> Self {
        Self {
            driver,
            session_id,
            properties,
        }
    }

    /// Builds the request path for this session plus `suffix`.
    pub(crate) fn path(&self, suffix: &str) -> String {
        format!("{SESSION_ENDPOINT}/{}{suffix}", self.session_id)
    }

    /// Replaces the snapshot if the envelope carries a fresh value.
    ///
    /// Called only after the status check has passed, so a failed
    /// operation never touches the snapshot.
    pub(crate) fn absorb(&mut self, envelope: &WireResponse) -> Result<()> {
        if let Some(properties) = envelope.decode_value::<SessionProperties>()? {
            self.properties = properties;
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use crate::session::testing::{EMPTY_OK, STALE_SESSION, connected_session};

    #[test]
    fn test_properties_decode_camel_case() {
        let json = r#"{
            "browserName": "phantomjs",
            "javascriptEnabled": true,
            "takesScreenshot": true,
            "webStorageEnabled": false,
            "proxy": {"proxyType": "direct"}
        }"#;

        let properties: SessionProperties = serde_json::from_str(json).expect("decode");
        assert_eq!(properties.browser_name, "phantomjs");
        assert!(properties.javascript_enabled);
        assert!(properties.takes_screenshot);
        assert!(!properties.web_storage_enabled);
        assert_eq!(properties.proxy.proxy_type, "direct");
    }

    #[test]
    fn test_properties_tolerate_unknown_and_missing_fields() {
        let json = r#"{"browserName": "firefox", "somethingNew": 1}"#;
        let properties: SessionProperties = serde_json::from_str(json).expect("decode");
        assert_eq!(properties.browser_name, "firefox");
        assert_eq!(properties.version, "");
    }

    #[tokio::test]
    async fn test_close_sends_delete() {
        let (mut server, mut session) = connected_session(vec![EMPTY_OK.to_string()]).await;

        session.close().await.expect("close");

        let recorded = server.request().await;
        assert_eq!(recorded.method, "DELETE");
        assert_eq!(recorded.path, "/wd/hub/session/4d2c9aa0");
        assert!(recorded.body.is_empty());
    }

    #[tokio::test]
    async fn test_operation_after_close_fails() {
        let (_server, mut session) =
            connected_session(vec![EMPTY_OK.to_string(), STALE_SESSION.to_string()]).await;

        session.close().await.expect("close");

        let err = session.title().await.unwrap_err();
        assert!(err.is_wire());
        assert_eq!(err.wire_status(), Some(6));
    }

    #[tokio::test]
    async fn test_failed_operation_keeps_snapshot() {
        let (_server, mut session) = connected_session(vec![STALE_SESSION.to_string()]).await;
        let before = session.properties().clone();

        let err = session.refresh().await.unwrap_err();
        assert!(err.is_wire());
        assert_eq!(session.properties(), &before);
    }

    #[tokio::test]
    async fn test_absorb_replaces_snapshot() {
        let reply = r#"{
            "sessionId": "4d2c9aa0",
            "state": "success",
            "status": 0,
            "value": {"browserName": "firefox", "version": "102.0"}
        }"#;
        let (_server, mut session) = connected_session(vec![reply.to_string()]).await;
        assert_eq!(session.properties().browser_name, "phantomjs");

        session.refresh().await.expect("refresh");
        assert_eq!(session.properties().browser_name, "firefox");
        assert_eq!(session.properties().version, "102.0");
    }
}
