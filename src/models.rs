//! Value objects produced by the scoring pipeline.
//!
//! Both [`FeatureRecord`] and [`RiskAssessment`] are created per request,
//! owned by the request-handling context, and never persisted by the engine.

use serde::Serialize;

/// The central feature vector extracted for one URL.
///
/// Every field has a defined default that is substituted when its source
/// signal fails, so the record is never partially populated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureRecord {
    /// Character count of the normalized URL.
    pub url_length: u32,
    /// Count of `.` characters in the URL.
    pub dots_count: u32,
    /// Count of digit characters in the URL.
    pub numeric_chars: u32,
    /// Count of non-alphanumeric, non-dot characters in the URL.
    pub special_chars: u32,
    /// Count of matched keywords from the suspicious vocabulary.
    pub suspicious_words: u32,
    /// Whether the host matches a known shortener domain.
    pub shortened_url: bool,
    /// Number of redirect hops observed (0 on probe failure).
    pub redirect_count: u32,
    /// Whether the registrable domain resolves to an address (false on failure).
    pub has_dns_record: bool,
    /// Age of the domain in days per its registration record (0 if unknown;
    /// treated as maximally suspicious by the scorer).
    pub domain_age_days: u32,
    /// Whether the host answers a TLS connection (false on failure).
    pub has_ssl: bool,
    /// Whether the resolved address is flagged by the reputation source
    /// (false on failure or when the service is unconfigured).
    pub blacklisted_ip: bool,
}

/// Three-way classification of a scanned URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskStatus {
    /// Score below the suspicious threshold.
    Safe,
    /// Score at or above the suspicious threshold, below the phishing one.
    Suspicious,
    /// Score at or above the phishing threshold.
    Phishing,
}

impl std::fmt::Display for RiskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskStatus::Safe => f.write_str("safe"),
            RiskStatus::Suspicious => f.write_str("suspicious"),
            RiskStatus::Phishing => f.write_str("phishing"),
        }
    }
}

/// URL-shape portion of the analysis breakdown.
#[derive(Debug, Clone, Serialize)]
pub struct UrlAnalysis {
    /// Normalized URL length.
    pub length: u32,
    /// Dot count.
    pub dots: u32,
    /// Digit count.
    pub numbers: u32,
    /// Special character count.
    pub special_chars: u32,
    /// Number of subdomain labels on the host.
    pub subdomain_count: u32,
    /// Number of non-empty path segments.
    pub path_depth: u32,
    /// Whether the URL carries an explicit port.
    pub has_port: bool,
    /// Whether the URL embeds credentials (user or password).
    pub has_credentials: bool,
    /// Human-readable descriptions of matched structural anomaly patterns.
    pub suspicious_patterns: Vec<String>,
}

/// Domain-level portion of the analysis breakdown.
#[derive(Debug, Clone, Serialize)]
pub struct DomainAnalysis {
    /// Domain age in days.
    pub age_days: u32,
    /// DNS record presence.
    pub has_dns: bool,
    /// TLS reachability.
    pub has_ssl: bool,
}

/// Security-signal portion of the analysis breakdown.
#[derive(Debug, Clone, Serialize)]
pub struct SecurityChecks {
    /// Shortener membership.
    pub is_shortened: bool,
    /// Observed redirect hops.
    pub redirect_count: u32,
    /// Reputation flag.
    pub blacklisted: bool,
}

/// Structured presentation breakdown grouping features by category.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisBreakdown {
    pub url_analysis: UrlAnalysis,
    pub domain_analysis: DomainAnalysis,
    pub security_checks: SecurityChecks,
}

/// A form discovered during content analysis that collects a password.
#[derive(Debug, Clone, Serialize)]
pub struct SuspiciousForm {
    /// The form's `action` attribute, if present.
    pub action: Option<String>,
    /// The form's `method` attribute, if present.
    pub method: Option<String>,
    /// Always true for reported forms; retained for the wire shape.
    pub has_password: bool,
}

/// Result of the optional page-content analysis.
///
/// Reported alongside the risk score, never merged into it. A fetch failure
/// yields an empty result with `error` set rather than failing the request.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ContentAnalysis {
    /// Absolute http(s) hyperlink targets found on the page.
    pub external_links: Vec<String>,
    /// Forms containing a password-type input.
    pub suspicious_forms: Vec<SuspiciousForm>,
    /// Total `<a>` elements found.
    pub total_links: u32,
    /// Total `<form>` elements found.
    pub forms_count: u32,
    /// Fetch/parse error indicator; `None` on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Complete assessment for one scanned URL.
#[derive(Debug, Clone, Serialize)]
pub struct RiskAssessment {
    /// Three-way classification.
    pub status: RiskStatus,
    /// Weighted risk score. Nominally `[0, 1]`, but the suspicious-keyword
    /// contribution uses the raw match count, so scores above 1.0 are
    /// possible when several keywords match.
    pub risk_score: f64,
    /// The feature vector the score was derived from.
    pub features: FeatureRecord,
    /// Presentation breakdown.
    pub analysis: AnalysisBreakdown,
    /// Page-content analysis, present only when deep scanning was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_analysis: Option<ContentAnalysis>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_status_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&RiskStatus::Safe).unwrap(), "\"safe\"");
        assert_eq!(
            serde_json::to_string(&RiskStatus::Suspicious).unwrap(),
            "\"suspicious\""
        );
        assert_eq!(
            serde_json::to_string(&RiskStatus::Phishing).unwrap(),
            "\"phishing\""
        );
    }

    #[test]
    fn test_risk_status_display() {
        assert_eq!(RiskStatus::Safe.to_string(), "safe");
        assert_eq!(RiskStatus::Phishing.to_string(), "phishing");
    }

    #[test]
    fn test_content_analysis_error_omitted_when_none() {
        let analysis = ContentAnalysis::default();
        let json = serde_json::to_value(&analysis).unwrap();
        assert!(json.get("error").is_none());

        let failed = ContentAnalysis {
            error: Some("fetch failed".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&failed).unwrap();
        assert_eq!(json["error"], "fetch failed");
    }
}
