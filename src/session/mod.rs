//! Remote session entities.
//!
//! A [`Session`] represents one live, automatable browser instance on
//! the remote end, identified by an opaque server-assigned ID. Every
//! operation is a single HTTP round trip against the hub.
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `core` | [`Session`] itself plus the negotiated-property snapshot |
//! | `navigation` | URL, title, and history operations |
//! | `window` | Window sizing |
//! | `source` | Page source as a byte stream |
//! | `screenshot` | Lazily-decoded PNG screenshots |

// ============================================================================
// Submodules
// ============================================================================

/// Session lifecycle and negotiated properties.
pub mod core;

/// Navigation and inspection operations.
pub mod navigation;

/// Screenshot capture.
pub mod screenshot;

/// Page source retrieval.
pub mod source;

/// Window sizing.
pub mod window;

// ============================================================================
// Re-exports
// ============================================================================

pub use core::{ProxyProperties, Session, SessionProperties};
pub use screenshot::Screenshot;
pub use source::PageSource;

// ============================================================================
// Test Support
// ============================================================================
