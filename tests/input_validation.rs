//! Tests for input rejection: invalid URLs error, everything else scans.

use phishguard::{normalize_url, EngineConfig, ScanEngine, ScanError};

#[test]
fn normalizer_accepts_bare_domains() {
    let normalized = normalize_url("example-phishing-login.com").unwrap();
    assert_eq!(normalized.url, "https://example-phishing-login.com");
    assert_eq!(normalized.host, "example-phishing-login.com");
}

#[test]
fn normalizer_rejects_malformed_input() {
    for input in ["", "   ", "not a url at all!!!", "://missing-scheme.com"] {
        assert!(
            normalize_url(input).is_err(),
            "input {input:?} should be rejected"
        );
    }
}

#[test]
fn normalizer_rejects_oversized_input() {
    let oversized = format!("https://example.com/{}", "a".repeat(4000));
    match normalize_url(&oversized) {
        Err(ScanError::InvalidUrl(message)) => {
            assert!(message.contains("maximum length"));
        }
        other => panic!("expected InvalidUrl, got {other:?}"),
    }
}

#[tokio::test]
async fn engine_surfaces_invalid_url_as_rejection() {
    let engine = ScanEngine::new(EngineConfig::default()).unwrap();

    match engine.scan("definitely not a url", false).await {
        Err(ScanError::InvalidUrl(_)) => {}
        other => panic!("expected InvalidUrl, got {other:?}"),
    }
}

#[tokio::test]
async fn engine_counts_invalid_input_in_stats() {
    let engine = ScanEngine::new(EngineConfig::default()).unwrap();

    let _ = engine.scan("not a url", false).await;
    let _ = engine.scan("also !! not ~~ a url", false).await;

    assert_eq!(
        engine.stats().error_count(phishguard::ErrorType::InvalidUrl),
        2
    );
}
