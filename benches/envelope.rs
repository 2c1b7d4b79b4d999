//! Wire-path benchmark suite.
//!
//! Benchmarks the pure client-side costs of a round trip:
//! - Capability-set construction
//! - Envelope decoding for small and large payloads
//!
//! Run with: cargo bench --bench envelope
//! Results saved to: target/criterion/

use criterion::{Criterion, criterion_group, criterion_main};

use jsonwire_webdriver::{Capabilities, PageLoadStrategy, WireResponse};

// ============================================================================
// Fixtures
// ============================================================================

const SESSION_ENVELOPE: &str = r#"{
    "sessionId": "4d2c9aa0-1c83-11e6-9f52-0800274e2b7b",
    "state": "success",
    "status": 0,
    "value": {
        "browserName": "phantomjs",
        "version": "2.1.1",
        "platform": "linux-unknown-64bit",
        "javascriptEnabled": true,
        "takesScreenshot": true,
        "handlesAlerts": true,
        "rotatable": true,
        "acceptSslCerts": true,
        "nativeEvents": true,
        "proxy": {"proxyType": "direct"}
    }
}"#;

/// Roughly the size of a small screenshot payload.
fn screenshot_envelope() -> String {
    let payload = "iVBORw0KGgoAAAANSUhEUg".repeat(2048);
    format!(r#"{{"sessionId": "s1", "state": "success", "status": 0, "value": "{payload}"}}"#)
}

// ============================================================================
// Benchmark: Capability Construction
// ============================================================================

fn bench_capabilities(c: &mut Criterion) {
    c.bench_function("capabilities_build", |b| {
        b.iter(|| {
            Capabilities::new()
                .browser_name("phantomjs")
                .page_load_strategy(PageLoadStrategy::Eager)
                .accept_ssl_certs(true)
                .platform("ANY")
                .version("")
                .location_context_enabled(true)
                .javascript_enabled(true)
                .handles_alerts(true)
                .rotatable(true)
                .custom("phantomjs.page.settings.userAgent", "Mozilla/5.0")
        });
    });

    c.bench_function("capabilities_serialize", |b| {
        let caps = Capabilities::new()
            .browser_name("phantomjs")
            .javascript_enabled(true)
            .custom("phantomjs.page.customHeaders.Accept-Language", "ru-RU");
        b.iter(|| serde_json::to_vec(&caps).expect("serialize"));
    });
}

// ============================================================================
// Benchmark: Envelope Decoding
// ============================================================================

fn bench_envelope_decode(c: &mut Criterion) {
    c.bench_function("envelope_decode_session", |b| {
        b.iter(|| {
            let envelope: WireResponse =
                serde_json::from_str(SESSION_ENVELOPE).expect("decode");
            envelope
        });
    });

    let screenshot = screenshot_envelope();
    c.bench_function("envelope_decode_screenshot", |b| {
        b.iter(|| {
            let envelope: WireResponse = serde_json::from_str(&screenshot).expect("decode");
            envelope.value_as_bytes().expect("string value")
        });
    });
}

criterion_group!(benches, bench_capabilities, bench_envelope_decode);
criterion_main!(benches);
