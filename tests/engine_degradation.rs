//! Tests for pipeline completeness under total collector failure.
//!
//! Uses a host under the reserved `.invalid` TLD so every network probe
//! fails fast and substitutes its documented default. The scan must still
//! return a complete assessment, never an error.

use phishguard::{EngineConfig, RiskStatus, ScanEngine};

fn offline_engine() -> ScanEngine {
    let mut config = EngineConfig::default();
    config.timeouts.dns_secs = 1;
    config.timeouts.redirect_secs = 2;
    config.timeouts.domain_age_secs = 2;
    config.timeouts.tcp_connect_secs = 1;
    config.timeouts.tls_handshake_secs = 1;
    config.timeouts.reputation_secs = 1;
    config.http_timeout_secs = 2;
    config.reputation_api_key = None;
    config.use_system_dns = true;
    ScanEngine::new(config).expect("engine construction should succeed")
}

#[tokio::test]
async fn scan_with_all_collectors_failing_returns_complete_assessment() {
    let assessment = offline_engine()
        .scan("https://unregistered-host.invalid/welcome", false)
        .await
        .expect("degraded scan must not error");

    let features = &assessment.features;
    // Structural fields reflect the URL
    assert!(features.url_length > 0);
    assert_eq!(features.suspicious_words, 0);
    // Network fields carry their documented defaults
    assert_eq!(features.redirect_count, 0);
    assert!(!features.has_dns_record);
    assert_eq!(features.domain_age_days, 0);
    assert!(!features.has_ssl);
    assert!(!features.blacklisted_ip);
    assert!(!features.shortened_url);
}

#[tokio::test]
async fn degraded_defaults_alone_score_suspicious() {
    // No keywords: 0.10 (no DNS) + 0.15 (age 0) + 0.05 (no SSL) = 0.30
    let assessment = offline_engine()
        .scan("https://unregistered-host.invalid/", false)
        .await
        .unwrap();

    assert!((assessment.risk_score - 0.30).abs() < 1e-9);
    assert_eq!(assessment.status, RiskStatus::Suspicious);
}

#[tokio::test]
async fn degraded_scan_with_keyword_reaches_phishing() {
    // One keyword on top of the degraded defaults crosses 0.60
    let assessment = offline_engine()
        .scan("unregistered-login-host.invalid", false)
        .await
        .unwrap();

    assert_eq!(assessment.features.suspicious_words, 1);
    assert!((assessment.risk_score - 0.60).abs() < 1e-9);
    assert_eq!(assessment.status, RiskStatus::Phishing);
}

#[tokio::test]
async fn shortener_detection_needs_no_network() {
    // Membership test fires even when every networked probe degrades
    let assessment = offline_engine()
        .scan("http://bit.ly/xyz", false)
        .await
        .unwrap();

    assert!(assessment.features.shortened_url);
    assert!(assessment.analysis.security_checks.is_shortened);
}

#[tokio::test]
async fn analysis_breakdown_mirrors_features() {
    let assessment = offline_engine()
        .scan("https://a.b.unregistered-host.invalid:8443/one/two", false)
        .await
        .unwrap();

    let features = &assessment.features;
    let analysis = &assessment.analysis;
    assert_eq!(analysis.url_analysis.length, features.url_length);
    assert_eq!(analysis.domain_analysis.age_days, features.domain_age_days);
    assert_eq!(analysis.domain_analysis.has_ssl, features.has_ssl);
    assert_eq!(
        analysis.security_checks.redirect_count,
        features.redirect_count
    );
    assert_eq!(analysis.url_analysis.subdomain_count, 2);
    assert_eq!(analysis.url_analysis.path_depth, 2);
    assert!(analysis.url_analysis.has_port);
}

#[tokio::test]
async fn content_analysis_failure_does_not_fail_scan() {
    let assessment = offline_engine()
        .scan("https://unregistered-host.invalid/", true)
        .await
        .expect("content fetch failure must not fail the scan");

    let content = assessment
        .content_analysis
        .expect("content analysis requested, so the field must be present");
    assert!(content.error.is_some());
    assert!(content.external_links.is_empty());
    assert!(content.suspicious_forms.is_empty());
}
