//! Request body shapes.
//!
//! Only three operations carry a body; everything else is a bare
//! method + path. The shapes here serialize to exactly what the remote
//! end documents.

// ============================================================================
// Imports
// ============================================================================

use serde::Serialize;

use crate::capabilities::Capabilities;

// ============================================================================
// NewSessionRequest
// ============================================================================

/// Session-creation body.
///
/// # Format
///
/// ```json
/// {"desiredCapabilities": {"browserName": "phantomjs", ...}}
/// ```
#[derive(Debug, Serialize)]
pub struct NewSessionRequest<'a> {
    /// The client's requested capability set.
    #[serde(rename = "desiredCapabilities")]
    pub desired_capabilities: &'a Capabilities,
}

impl<'a> NewSessionRequest<'a> {
    /// Wraps a capability set for session creation.
    #[inline]
    #[must_use]
    pub fn new(desired_capabilities: &'a Capabilities) -> Self {
        Self {
            desired_capabilities,
        }
    }
}

// ============================================================================
// WindowSizeRequest
// ============================================================================

/// Window-resize body.
///
/// # Format
///
/// ```json
/// {"width": 2048, "height": 1680}
/// ```
#[derive(Debug, Clone, Copy, Serialize)]
pub struct WindowSizeRequest {
    /// Window width in pixels.
    pub width: u32,

    /// Window height in pixels.
    pub height: u32,
}

// ============================================================================
// NavigateRequest
// ============================================================================

/// Navigation body.
///
/// # Format
///
/// ```json
/// {"url": "https://example.com"}
/// ```
#[derive(Debug, Serialize)]
pub struct NavigateRequest<'a> {
    /// Target URL.
    pub url: &'a str,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    #[test]
    fn test_new_session_shape() {
        let caps = Capabilities::new().browser_name("phantomjs");
        let body = NewSessionRequest::new(&caps);
        let value = serde_json::to_value(&body).expect("serialize");

        assert_eq!(
            value,
            json!({"desiredCapabilities": {"browserName": "phantomjs"}})
        );
    }

    #[test]
    fn test_new_session_empty_capabilities() {
        let caps = Capabilities::new();
        let body = NewSessionRequest::new(&caps);
        let value = serde_json::to_value(&body).expect("serialize");

        assert_eq!(value, json!({"desiredCapabilities": {}}));
    }

    #[test]
    fn test_window_size_shape() {
        let body = WindowSizeRequest {
            width: 2048,
            height: 1680,
        };
        let value = serde_json::to_value(body).expect("serialize");

        assert_eq!(value, json!({"width": 2048, "height": 1680}));
    }

    #[test]
    fn test_navigate_shape() {
        let body = NavigateRequest {
            url: "http://httpbin.org/headers",
        };
        let value = serde_json::to_value(&body).expect("serialize");

        assert_eq!(value, json!({"url": "http://httpbin.org/headers"}));
    }
}
