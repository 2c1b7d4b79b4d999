//! JSON Wire Protocol client for remote browser automation.
//!
//! This library drives a remote WebDriver server (a browser driver
//! binary or a hub such as `phantomjs --webdriver`) over the legacy
//! JSON Wire Protocol: every operation is a path under `/session/{id}`
//! and every response carries a uniform status/value envelope.
//!
//! # Architecture
//!
//! The client follows a local/remote model:
//!
//! - **Local end (Rust)**: builds capability maps and JSON requests
//! - **Remote end (hub)**: executes them in a live browser session
//!
//! Key design principles:
//!
//! - One [`Session`] per remote session ID, held by the caller
//! - One HTTP round trip per operation, no retries, no added timeouts
//! - Errors distinguish "the transport failed" from "the server refused"
//!
//! # Quick Start
//!
//! ```no_run
//! use jsonwire_webdriver::{Capabilities, Driver, PageLoadStrategy, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let driver = Driver::new(
//!         Capabilities::new()
//!             .browser_name("phantomjs")
//!             .page_load_strategy(PageLoadStrategy::Eager)
//!             .accept_ssl_certs(true),
//!     );
//!
//!     let mut session = driver.connect("http://127.0.0.1:4444").await?;
//!
//!     session.set_window_size(2048, 1680).await?;
//!     session.set_url("http://httpbin.org/headers").await?;
//!     println!("Page title: {}", session.title().await?);
//!
//!     session.screenshot().await?.save("screenshot.png")?;
//!     session.close().await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`capabilities`] | Desired-capability construction |
//! | [`driver`] | Driver factory and configuration |
//! | [`session`] | Session entities and operations |
//! | [`protocol`] | Wire message types |
//! | [`transport`] | HTTP transport layer |
//! | [`error`] | Error types and [`Result`] alias |
//! | [`identifiers`] | Type-safe ID wrappers |

// ============================================================================
// Modules
// ============================================================================

/// Desired-capability construction.
///
/// Use [`Capabilities::new()`] and chain setters; later setters win for
/// the same key.
pub mod capabilities;

/// Driver factory and configuration.
///
/// Use [`Driver::new()`] or [`Driver::builder()`] to create a configured
/// driver instance.
pub mod driver;

/// Error types and result aliases.
///
/// All fallible operations return [`Result<T>`] which uses [`Error`].
pub mod error;

/// Type-safe identifiers for remote sessions.
pub mod identifiers;

/// JSON Wire Protocol message types.
///
/// Request body shapes and the uniform response envelope.
pub mod protocol;

/// Remote session entities.
///
/// [`Session`] plus its navigation, window, source, and screenshot
/// operations.
pub mod session;

/// HTTP transport layer.
///
/// Request building and envelope execution against the hub.
pub mod transport;

// ============================================================================
// Re-exports
// ============================================================================

// Capability types
pub use capabilities::{
    Capabilities, LoggingPrefs, PageLoadStrategy, ProxyCapability, RequestOrigins,
};

// Driver types
pub use driver::{Driver, DriverBuilder};

// Error types
pub use error::{Error, Result};

// Identifier types
pub use identifiers::SessionId;

// Protocol types
pub use protocol::WireResponse;

// Session types
pub use session::{PageSource, ProxyProperties, Screenshot, Session, SessionProperties};
