//! Tests for the known-safe allowlist short circuit.
//!
//! Allowlisted hosts bypass all network probing, so these tests run fully
//! offline despite going through the real engine.

use phishguard::{EngineConfig, RiskStatus, ScanEngine};

fn engine() -> ScanEngine {
    ScanEngine::new(EngineConfig::default()).expect("engine construction should succeed")
}

#[tokio::test]
async fn allowlisted_host_is_safe_with_zero_score() {
    let assessment = engine()
        .scan("https://mail.google.com/inbox", false)
        .await
        .unwrap();

    assert_eq!(assessment.status, RiskStatus::Safe);
    assert_eq!(assessment.risk_score, 0.0);
}

#[tokio::test]
async fn allowlist_ignores_suspicious_path_content() {
    // Keyword matching must not fire for a trusted host, even with a path
    // full of sensitive keywords
    let assessment = engine()
        .scan("https://mail.google.com/login/secure/bank", false)
        .await
        .unwrap();

    assert_eq!(assessment.status, RiskStatus::Safe);
    assert_eq!(assessment.risk_score, 0.0);
    assert_eq!(assessment.features.suspicious_words, 0);
}

#[tokio::test]
async fn allowlisted_features_carry_conservative_placeholders() {
    let assessment = engine().scan("https://github.com/", false).await.unwrap();

    let features = &assessment.features;
    assert!(features.has_ssl);
    assert!(features.has_dns_record);
    assert!(!features.shortened_url);
    assert!(!features.blacklisted_ip);
    assert_eq!(features.redirect_count, 0);
    // Large constant so the young-domain weight can never fire
    assert!(features.domain_age_days >= 1000);
    // Cheap counts still reflect the real URL
    assert_eq!(features.url_length, "https://github.com/".len() as u32);
}

#[tokio::test]
async fn exact_and_subdomain_matches_short_circuit() {
    let engine = engine();

    let exact = engine.scan("https://google.com", false).await.unwrap();
    assert_eq!(exact.status, RiskStatus::Safe);

    let subdomain = engine
        .scan("https://deep.nested.google.com/path", false)
        .await
        .unwrap();
    assert_eq!(subdomain.status, RiskStatus::Safe);
}

#[tokio::test]
async fn lookalike_domains_are_not_allowlisted() {
    // A host merely containing an allowlisted name must go through the full
    // pipeline. Use an empty-probe configuration trick: we only check that
    // the structural analyzer actually ran (keyword hit recorded), which the
    // short circuit would have zeroed.
    let mut config = EngineConfig::default();
    // Keep the scan offline-fast: short probe timeouts, no reputation key
    config.timeouts.dns_secs = 1;
    config.timeouts.redirect_secs = 1;
    config.timeouts.domain_age_secs = 1;
    config.timeouts.tcp_connect_secs = 1;
    config.timeouts.tls_handshake_secs = 1;
    config.timeouts.reputation_secs = 1;
    config.reputation_api_key = None;
    config.use_system_dns = true;
    let engine = ScanEngine::new(config).unwrap();

    let assessment = engine
        .scan("https://google.com.login-verify.invalid/", false)
        .await
        .unwrap();
    assert!(assessment.features.suspicious_words >= 1);
}

#[tokio::test]
async fn custom_allowlist_is_respected() {
    let config = EngineConfig {
        allowlist_domains: vec!["internal.example".to_string()],
        ..EngineConfig::default()
    };
    let engine = ScanEngine::new(config).unwrap();

    let assessment = engine
        .scan("https://wiki.internal.example/login", false)
        .await
        .unwrap();
    assert_eq!(assessment.status, RiskStatus::Safe);
    assert_eq!(assessment.risk_score, 0.0);
}
