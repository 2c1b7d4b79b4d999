//! HTTP transport layer.
//!
//! Turns a logical operation (method, path relative to the hub base URL,
//! optional JSON body) into a fully-formed HTTP request, executes it, and
//! decodes the uniform response envelope.
//!
//! ```text
//! ┌─────────────────┐                              ┌─────────────────┐
//! │  Driver (Rust)  │         HTTP + JSON          │  Remote hub     │
//! │                 │◄────────────────────────────►│  (geckodriver,  │
//! │  WireTransport  │      {base_url}/wd/hub/...   │   phantomjs...) │
//! └─────────────────┘                              └─────────────────┘
//! ```
//!
//! One request, one envelope, no retries. Timeout policy is whatever the
//! injected HTTP client was built with.

// ============================================================================
// Submodules
// ============================================================================

/// Request building and envelope execution.
pub mod envelope;

#[cfg(test)]
pub(crate) mod stub;

// ============================================================================
// Re-exports
// ============================================================================

pub use envelope::WireTransport;
