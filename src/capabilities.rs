//! Desired-capability construction.
//!
//! Capabilities are an open string-to-JSON mapping sent to the remote end
//! at session creation. The remote end negotiates what it actually
//! provides and returns the result in the session-creation response.
//!
//! Setters apply strictly in call order; setting the same key twice keeps
//! the last value. Unknown keys pass through to the server verbatim.
//!
//! # Example
//!
//! ```
//! use jsonwire_webdriver::{Capabilities, PageLoadStrategy};
//!
//! let caps = Capabilities::new()
//!     .browser_name("phantomjs")
//!     .page_load_strategy(PageLoadStrategy::Eager)
//!     .accept_ssl_certs(true)
//!     .custom("phantomjs.page.settings.userAgent", "Mozilla/5.0");
//! ```

// ============================================================================
// Imports
// ============================================================================

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ============================================================================
// PageLoadStrategy
// ============================================================================

/// Page-load strategy requested from the remote end.
///
/// The protocol only defines these two values for the
/// `pageLoadingStrategy` capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageLoadStrategy {
    /// Return as soon as the DOM is ready.
    Eager,
    /// Wait for the full load event.
    #[default]
    Normal,
}

impl PageLoadStrategy {
    /// Returns the wire value for this strategy.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Eager => "eager",
            Self::Normal => "normal",
        }
    }
}

// ============================================================================
// ProxyCapability
// ============================================================================

/// Proxy configuration sent under the `proxy` capability key.
///
/// Fields the caller leaves empty are sent as empty strings, which the
/// remote end treats as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxyCapability {
    /// Proxy mode, e.g. `direct`, `manual`, `system`.
    #[serde(rename = "proxyType")]
    pub proxy_type: String,

    /// SOCKS proxy address (`host:port`).
    #[serde(rename = "socksProxy")]
    pub socks: String,

    /// HTTP proxy address (`host:port`).
    #[serde(rename = "httpProxy")]
    pub http: String,

    /// TLS proxy address (`host:port`).
    #[serde(rename = "sslProxy")]
    pub ssl: String,

    /// FTP proxy address (`host:port`).
    #[serde(rename = "ftpProxy")]
    pub ftp: String,
}

impl ProxyCapability {
    /// Creates a direct (no proxy) configuration.
    #[inline]
    #[must_use]
    pub fn direct() -> Self {
        Self {
            proxy_type: "direct".to_string(),
            ..Self::default()
        }
    }

    /// Creates a manual proxy configuration with no addresses set.
    #[inline]
    #[must_use]
    pub fn manual() -> Self {
        Self {
            proxy_type: "manual".to_string(),
            ..Self::default()
        }
    }

    /// Creates a configuration deferring to system proxy settings.
    #[inline]
    #[must_use]
    pub fn system() -> Self {
        Self {
            proxy_type: "system".to_string(),
            ..Self::default()
        }
    }

    /// Sets the SOCKS proxy address.
    #[inline]
    #[must_use]
    pub fn with_socks(mut self, addr: impl Into<String>) -> Self {
        self.socks = addr.into();
        self
    }

    /// Sets the HTTP proxy address.
    #[inline]
    #[must_use]
    pub fn with_http(mut self, addr: impl Into<String>) -> Self {
        self.http = addr.into();
        self
    }

    /// Sets the TLS proxy address.
    #[inline]
    #[must_use]
    pub fn with_ssl(mut self, addr: impl Into<String>) -> Self {
        self.ssl = addr.into();
        self
    }

    /// Sets the FTP proxy address.
    #[inline]
    #[must_use]
    pub fn with_ftp(mut self, addr: impl Into<String>) -> Self {
        self.ftp = addr.into();
        self
    }
}

impl From<ProxyCapability> for Value {
    fn from(proxy: ProxyCapability) -> Self {
        let mut map = Map::new();
        map.insert("proxyType".to_string(), Value::String(proxy.proxy_type));
        map.insert("socksProxy".to_string(), Value::String(proxy.socks));
        map.insert("httpProxy".to_string(), Value::String(proxy.http));
        map.insert("sslProxy".to_string(), Value::String(proxy.ssl));
        map.insert("ftpProxy".to_string(), Value::String(proxy.ftp));
        Value::Object(map)
    }
}

// ============================================================================
// LoggingPrefs
// ============================================================================

/// Logging preferences sent under the `loggingPrefs` capability key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingPrefs {
    /// Log level requested for the browser log.
    pub browser: String,

    /// Log level requested for the driver log.
    pub driver: String,
}

impl LoggingPrefs {
    /// Creates logging preferences with the given browser and driver levels.
    #[inline]
    #[must_use]
    pub fn new(browser: impl Into<String>, driver: impl Into<String>) -> Self {
        Self {
            browser: browser.into(),
            driver: driver.into(),
        }
    }
}

impl From<LoggingPrefs> for Value {
    fn from(prefs: LoggingPrefs) -> Self {
        let mut map = Map::new();
        map.insert("browser".to_string(), Value::String(prefs.browser));
        map.insert("driver".to_string(), Value::String(prefs.driver));
        Value::Object(map)
    }
}

// ============================================================================
// RequestOrigins
// ============================================================================

/// Client identification sent under the `requestOrigins` capability key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestOrigins {
    /// Client name.
    pub name: String,

    /// Client homepage or repository URL.
    pub url: String,

    /// Client version string.
    pub version: String,
}

impl RequestOrigins {
    /// Creates a request-origins record.
    #[inline]
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            version: version.into(),
        }
    }
}

impl From<RequestOrigins> for Value {
    fn from(origins: RequestOrigins) -> Self {
        let mut map = Map::new();
        map.insert("name".to_string(), Value::String(origins.name));
        map.insert("url".to_string(), Value::String(origins.url));
        map.insert("version".to_string(), Value::String(origins.version));
        Value::Object(map)
    }
}

// ============================================================================
// Capabilities
// ============================================================================

/// Desired browser capabilities for session creation.
///
/// An ordered open mapping from capability key to JSON value. Built
/// incrementally through the setters below and immutable once handed to
/// the driver. Later setters overwrite earlier ones for the same key.
///
/// An empty set is a valid (if minimal) session request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Capabilities {
    entries: Map<String, Value>,
}

// ============================================================================
// Capabilities - Constructors
// ============================================================================

impl Capabilities {
    /// Creates an empty capability set.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

// ============================================================================
// Capabilities - Well-Known Setters
// ============================================================================

impl Capabilities {
    /// Sets the `browserName` capability.
    #[inline]
    #[must_use]
    pub fn browser_name(self, name: impl Into<String>) -> Self {
        self.insert("browserName", Value::String(name.into()))
    }

    /// Sets the `pageLoadingStrategy` capability.
    #[inline]
    #[must_use]
    pub fn page_load_strategy(self, strategy: PageLoadStrategy) -> Self {
        self.insert(
            "pageLoadingStrategy",
            Value::String(strategy.as_str().to_string()),
        )
    }

    /// Sets the `platform` capability.
    #[inline]
    #[must_use]
    pub fn platform(self, platform: impl Into<String>) -> Self {
        self.insert("platform", Value::String(platform.into()))
    }

    /// Sets the `version` capability.
    #[inline]
    #[must_use]
    pub fn version(self, version: impl Into<String>) -> Self {
        self.insert("version", Value::String(version.into()))
    }

    /// Sets the `handlesAlerts` capability.
    #[inline]
    #[must_use]
    pub fn handles_alerts(self, enabled: bool) -> Self {
        self.insert("handlesAlerts", Value::Bool(enabled))
    }

    /// Sets the `javascriptEnabled` capability.
    #[inline]
    #[must_use]
    pub fn javascript_enabled(self, enabled: bool) -> Self {
        self.insert("javascriptEnabled", Value::Bool(enabled))
    }

    /// Sets the `locationContextEnabled` capability.
    #[inline]
    #[must_use]
    pub fn location_context_enabled(self, enabled: bool) -> Self {
        self.insert("locationContextEnabled", Value::Bool(enabled))
    }

    /// Sets the `rotatable` capability.
    #[inline]
    #[must_use]
    pub fn rotatable(self, enabled: bool) -> Self {
        self.insert("rotatable", Value::Bool(enabled))
    }

    /// Sets the `acceptSslCerts` capability.
    #[inline]
    #[must_use]
    pub fn accept_ssl_certs(self, enabled: bool) -> Self {
        self.insert("acceptSslCerts", Value::Bool(enabled))
    }

    /// Sets the `proxy` capability.
    #[inline]
    #[must_use]
    pub fn proxy(self, proxy: ProxyCapability) -> Self {
        self.insert("proxy", Value::from(proxy))
    }

    /// Sets the `loggingPrefs` capability.
    #[inline]
    #[must_use]
    pub fn logging_prefs(self, prefs: LoggingPrefs) -> Self {
        self.insert("loggingPrefs", Value::from(prefs))
    }

    /// Sets the `requestOrigins` capability.
    #[inline]
    #[must_use]
    pub fn request_origins(self, origins: RequestOrigins) -> Self {
        self.insert("requestOrigins", Value::from(origins))
    }
}

// ============================================================================
// Capabilities - Generic Setters
// ============================================================================

impl Capabilities {
    /// Sets an arbitrary string capability.
    ///
    /// Used for vendor-prefixed dotted keys, e.g.
    /// `phantomjs.page.customHeaders.Accept-Language`.
    #[inline]
    #[must_use]
    pub fn custom(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, Value::String(value.into()))
    }

    /// Sets an arbitrary capability to any JSON value.
    #[inline]
    #[must_use]
    pub fn insert(mut self, key: impl Into<String>, value: Value) -> Self {
        self.entries.insert(key.into(), value);
        self
    }
}

// ============================================================================
// Capabilities - Accessors
// ============================================================================

impl Capabilities {
    /// Returns the value for a capability key, if set.
    #[inline]
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Returns the number of capability keys set.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no capabilities are set.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the key/value entries.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }
}

// ============================================================================
// Tests
// ============================================================================
