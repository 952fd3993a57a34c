//! Known-safe domain allowlist.
//!
//! Hosts matching the allowlist bypass all network probing and structural
//! scoring. This avoids wasting probe latency on well-known destinations and
//! avoids false positives from keyword matching on legitimate branded paths.

use crate::config::ALLOWLISTED_DOMAIN_AGE_DAYS;
use crate::models::FeatureRecord;

/// A fixed set of trusted root domains.
#[derive(Debug, Clone)]
pub struct Allowlist {
    domains: Vec<String>,
}

impl Allowlist {
    /// Builds an allowlist from root domains, lower-casing each entry.
    pub fn new(domains: &[String]) -> Self {
        Self {
            domains: domains.iter().map(|d| d.to_lowercase()).collect(),
        }
    }

    /// Returns true if `host` equals an allowlisted domain or is a subdomain
    /// of one (`host` ends with `.` + domain).
    pub fn matches(&self, host: &str) -> bool {
        let host = host.to_lowercase();
        self.domains
            .iter()
            .any(|safe| host == *safe || host.ends_with(&format!(".{safe}")))
    }

    /// Conservative placeholder feature record for a short-circuited scan.
    ///
    /// Cheap character counts are computed from the URL itself; every
    /// risk-contributing field is pinned to its safe value so the scorer
    /// (which is skipped anyway) could only produce 0.0 from it.
    pub fn placeholder_features(url: &str) -> FeatureRecord {
        FeatureRecord {
            url_length: url.chars().count() as u32,
            dots_count: url.chars().filter(|c| *c == '.').count() as u32,
            numeric_chars: url.chars().filter(|c| c.is_ascii_digit()).count() as u32,
            special_chars: url
                .chars()
                .filter(|c| !c.is_ascii_alphanumeric() && *c != '.')
                .count() as u32,
            suspicious_words: 0,
            shortened_url: false,
            redirect_count: 0,
            has_dns_record: true,
            domain_age_days: ALLOWLISTED_DOMAIN_AGE_DAYS,
            has_ssl: true,
            blacklisted_ip: false,
        }
    }
}
