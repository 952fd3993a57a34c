//! Risk scoring: weighted sum over the feature vector and classification.
//!
//! The score is a deterministic pure function of the [`FeatureRecord`] and the
//! configured weights: same record, same config, same score, always.

use crate::config::{ScoringWeights, Thresholds};
use crate::models::{FeatureRecord, RiskStatus};

/// Computes the weighted risk score for a feature record.
///
/// The suspicious-keyword term multiplies the raw match count by its weight,
/// so the result can exceed 1.0 when several keywords match; the other terms
/// are 0/1 indicators.
pub fn score_features(features: &FeatureRecord, weights: &ScoringWeights) -> f64 {
    let mut score = f64::from(features.suspicious_words) * weights.suspicious_words;
    if features.shortened_url {
        score += weights.shortened_url;
    }
    if features.redirect_count > weights.redirect_threshold {
        score += weights.many_redirects;
    }
    if !features.has_dns_record {
        score += weights.no_dns_record;
    }
    if features.domain_age_days < weights.young_domain_days {
        score += weights.young_domain;
    }
    if !features.has_ssl {
        score += weights.no_ssl;
    }
    if features.blacklisted_ip {
        score += weights.blacklisted_ip;
    }
    score
}

/// Classifies a risk score against the configured thresholds.
///
/// Half-open intervals: a score exactly at `thresholds.suspicious` is
/// suspicious, and a score exactly at `thresholds.phishing` is phishing.
pub fn classify(score: f64, thresholds: &Thresholds) -> RiskStatus {
    if score < thresholds.suspicious {
        RiskStatus::Safe
    } else if score < thresholds.phishing {
        RiskStatus::Suspicious
    } else {
        RiskStatus::Phishing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weights() -> ScoringWeights {
        ScoringWeights::default()
    }

    fn thresholds() -> Thresholds {
        Thresholds::default()
    }

    fn benign_features() -> FeatureRecord {
        FeatureRecord {
            url_length: 23,
            dots_count: 1,
            numeric_chars: 0,
            special_chars: 3,
            suspicious_words: 0,
            shortened_url: false,
            redirect_count: 0,
            has_dns_record: true,
            domain_age_days: 3650,
            has_ssl: true,
            blacklisted_ip: false,
        }
    }

    #[test]
    fn test_benign_record_scores_zero() {
        assert_eq!(score_features(&benign_features(), &weights()), 0.0);
        assert_eq!(classify(0.0, &thresholds()), RiskStatus::Safe);
    }

    #[test]
    fn test_score_is_deterministic() {
        let features = FeatureRecord {
            suspicious_words: 2,
            shortened_url: true,
            redirect_count: 5,
            has_dns_record: false,
            domain_age_days: 10,
            has_ssl: false,
            blacklisted_ip: true,
            ..benign_features()
        };
        let first = score_features(&features, &weights());
        let second = score_features(&features, &weights());
        assert_eq!(first, second);
    }

    #[test]
    fn test_all_weights_fire() {
        let features = FeatureRecord {
            suspicious_words: 1,
            shortened_url: true,
            redirect_count: 3,
            has_dns_record: false,
            domain_age_days: 0,
            has_ssl: false,
            blacklisted_ip: true,
            ..benign_features()
        };
        let score = score_features(&features, &weights());
        // 0.30 + 0.20 + 0.15 + 0.10 + 0.15 + 0.05 + 0.05
        assert!((score - 1.0).abs() < 1e-9);
        assert_eq!(classify(score, &thresholds()), RiskStatus::Phishing);
    }

    #[test]
    fn test_redirect_threshold_is_strict() {
        // Exactly at the threshold does not fire; one above does
        let at = FeatureRecord {
            redirect_count: 2,
            ..benign_features()
        };
        assert_eq!(score_features(&at, &weights()), 0.0);

        let above = FeatureRecord {
            redirect_count: 3,
            ..benign_features()
        };
        assert!((score_features(&above, &weights()) - 0.15).abs() < 1e-9);
    }

    #[test]
    fn test_young_domain_boundary() {
        // 30 days is not young; 29 is
        let at = FeatureRecord {
            domain_age_days: 30,
            ..benign_features()
        };
        assert_eq!(score_features(&at, &weights()), 0.0);

        let young = FeatureRecord {
            domain_age_days: 29,
            ..benign_features()
        };
        assert!((score_features(&young, &weights()) - 0.15).abs() < 1e-9);
    }

    #[test]
    fn test_keyword_count_is_uncapped() {
        let features = FeatureRecord {
            suspicious_words: 4,
            ..benign_features()
        };
        let score = score_features(&features, &weights());
        assert!((score - 1.2).abs() < 1e-9, "raw count pushes past 1.0");
        assert_eq!(classify(score, &thresholds()), RiskStatus::Phishing);
    }

    #[test]
    fn test_classification_boundary_at_suspicious() {
        // Exactly 0.30 is suspicious, not safe (half-open interval)
        assert_eq!(classify(0.30, &thresholds()), RiskStatus::Suspicious);
        assert_eq!(classify(0.2999, &thresholds()), RiskStatus::Safe);
    }

    #[test]
    fn test_classification_boundary_at_phishing() {
        // Exactly 0.60 is phishing, not suspicious (half-open interval)
        assert_eq!(classify(0.60, &thresholds()), RiskStatus::Phishing);
        assert_eq!(classify(0.5999, &thresholds()), RiskStatus::Suspicious);
    }

    #[test]
    fn test_spec_example_degraded_scan_is_phishing() {
        // "example-phishing-login.com": one keyword match, DNS/age/SSL probes
        // all fail-default. 0.30 + 0.10 + 0.15 + 0.05 = 0.60.
        let features = FeatureRecord {
            suspicious_words: 1,
            shortened_url: false,
            redirect_count: 0,
            has_dns_record: false,
            domain_age_days: 0,
            has_ssl: false,
            blacklisted_ip: false,
            ..benign_features()
        };
        let score = score_features(&features, &weights());
        assert!((score - 0.60).abs() < 1e-9);
        assert_eq!(classify(score, &thresholds()), RiskStatus::Phishing);
    }

    #[test]
    fn test_custom_weights_respected() {
        let custom = ScoringWeights {
            shortened_url: 0.5,
            ..ScoringWeights::default()
        };
        let features = FeatureRecord {
            shortened_url: true,
            ..benign_features()
        };
        assert!((score_features(&features, &custom) - 0.5).abs() < 1e-9);
    }
}
