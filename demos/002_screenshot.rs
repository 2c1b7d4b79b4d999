//! Screenshot and page-source demonstration.
//!
//! Demonstrates:
//! - Retrieving page source as a byte stream
//! - Capturing a screenshot and saving the decoded PNG
//!
//! Requires a JSON Wire hub on port 4444, e.g.:
//!   phantomjs --webdriver=4444
//!
//! Usage:
//!   cargo run --example 002_screenshot

// ============================================================================
// Imports
// ============================================================================

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use jsonwire_webdriver::{Capabilities, Driver};

// ============================================================================
// Constants
// ============================================================================

const HUB_URL: &str = "http://127.0.0.1:4444";
const TARGET_URL: &str = "https://example.com";
const OUTPUT_PATH: &str = "screenshot.png";

// ============================================================================
// Main
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== 002: Screenshot ===\n");

    let driver = Driver::new(Capabilities::new().browser_name("phantomjs"));

    println!("[Setup] Connecting to {HUB_URL}...");
    let mut session = driver.connect(HUB_URL).await?;
    println!("        ✓ Session opened (id={})\n", session.session_id());

    session.set_url(TARGET_URL).await?;

    let source = session.source().await?.into_string();
    println!("[Run]   Page source: {} bytes", source.len());

    session.screenshot().await?.save(OUTPUT_PATH)?;
    println!("[Run]   Screenshot saved to {OUTPUT_PATH}");

    session.close().await?;
    println!("\n[Done]  Session closed");

    Ok(())
}
