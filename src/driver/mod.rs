//! Driver factory and configuration.
//!
//! This module provides the main entry point for remote browser
//! automation.
//!
//! # Components
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Driver`] | Owns the HTTP client, capabilities, and hub base URL |
//! | [`DriverBuilder`] | Fluent configuration builder |
//!
//! # Example
//!
//! ```no_run
//! use jsonwire_webdriver::{Capabilities, Driver, Result};
//!
//! # async fn example() -> Result<()> {
//! let driver = Driver::new(Capabilities::new().browser_name("phantomjs"));
//! let mut session = driver.connect("http://127.0.0.1:4444").await?;
//!
//! session.set_url("https://example.com").await?;
//! # Ok(())
//! # }
//! ```

// ============================================================================
// Submodules
// ============================================================================

/// Fluent builder pattern for driver configuration.
pub mod builder;

/// Core driver implementation.
pub mod core;

// ============================================================================
// Re-exports
// ============================================================================

pub use builder::DriverBuilder;
pub use core::Driver;
