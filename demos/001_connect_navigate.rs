//! Session lifecycle and navigation demonstration.
//!
//! Demonstrates:
//! - Building a capability set
//! - Connecting to a remote hub
//! - Navigation, title, and window sizing
//!
//! Requires a JSON Wire hub on port 4444, e.g.:
//!   phantomjs --webdriver=4444
//!
//! Usage:
//!   cargo run --example 001_connect_navigate

// ============================================================================
// Imports
// ============================================================================

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use jsonwire_webdriver::{Capabilities, Driver, PageLoadStrategy};

// ============================================================================
// Constants
// ============================================================================

const HUB_URL: &str = "http://127.0.0.1:4444";
const TARGET_URL: &str = "http://httpbin.org/headers";

// ============================================================================
// Main
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== 001: Connect & Navigate ===\n");

    let driver = Driver::new(
        Capabilities::new()
            .browser_name("phantomjs")
            .page_load_strategy(PageLoadStrategy::Eager)
            .accept_ssl_certs(true)
            .javascript_enabled(true),
    );

    println!("[Setup] Connecting to {HUB_URL}...");
    let mut session = driver.connect(HUB_URL).await?;
    println!(
        "        ✓ Session opened (id={}, browser={})\n",
        session.session_id(),
        session.properties().browser_name
    );

    session.set_window_size(1280, 720).await?;
    println!("[Run]   Window resized to 1280x720");

    session.set_url(TARGET_URL).await?;
    println!("[Run]   Navigated to {}", session.url().await?);
    println!("[Run]   Title: {:?}", session.title().await?);

    session.close().await?;
    println!("\n[Done]  Session closed");

    Ok(())
}
