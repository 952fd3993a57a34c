//! Tunable engine configuration: scoring weights, classification thresholds,
//! keyword vocabulary, shortener and allowlist domain sets, probe timeouts,
//! and reputation service settings.
//!
//! Every knob here is configuration, not hardcoded truth. The defaults encode
//! the shipped behavior; operators can override any subset by loading a JSON
//! file with [`EngineConfig::from_json_file`].

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::config::constants::{
    DEFAULT_HTTP_TIMEOUT_SECS, DEFAULT_MAX_CONCURRENCY, DEFAULT_RDAP_ENDPOINT,
    DEFAULT_REPUTATION_ENDPOINT, DEFAULT_USER_AGENT, DNS_TIMEOUT_SECS, DOMAIN_AGE_TIMEOUT_SECS,
    REDIRECT_PROBE_TIMEOUT_SECS, REPUTATION_API_KEY_ENV, REPUTATION_TIMEOUT_SECS,
    TCP_CONNECT_TIMEOUT_SECS, TLS_HANDSHAKE_TIMEOUT_SECS,
};

/// Fixed weights applied to the scored feature subset.
///
/// The score is a plain weighted sum; every weight is an independent knob.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    /// Weight per matched suspicious keyword. Applied to the raw count, not a
    /// 0/1 indicator, so multiple matches can push the score past 1.0.
    pub suspicious_words: f64,
    /// Weight when the host is a known URL shortener.
    pub shortened_url: f64,
    /// Weight when the redirect chain exceeds [`ScoringWeights::redirect_threshold`] hops.
    pub many_redirects: f64,
    /// Weight when the registrable domain has no DNS A record.
    pub no_dns_record: f64,
    /// Weight when the domain is younger than [`ScoringWeights::young_domain_days`].
    pub young_domain: f64,
    /// Weight when the host does not answer a TLS connection.
    pub no_ssl: f64,
    /// Weight when the resolved address is flagged by the reputation source.
    pub blacklisted_ip: f64,
    /// Redirect hop count above which `many_redirects` applies.
    pub redirect_threshold: u32,
    /// Domain age in days below which `young_domain` applies.
    pub young_domain_days: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            suspicious_words: 0.30,
            shortened_url: 0.20,
            many_redirects: 0.15,
            no_dns_record: 0.10,
            young_domain: 0.15,
            no_ssl: 0.05,
            blacklisted_ip: 0.05,
            redirect_threshold: 2,
            young_domain_days: 30,
        }
    }
}

/// Classification cut points over the risk score.
///
/// Both intervals are half-open: a score exactly at `suspicious` classifies as
/// suspicious, and a score exactly at `phishing` classifies as phishing.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Scores at or above this are at least suspicious.
    pub suspicious: f64,
    /// Scores at or above this are phishing.
    pub phishing: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            suspicious: 0.30,
            phishing: 0.60,
        }
    }
}

/// Per-collector timeout ceilings, in seconds.
///
/// Each probe is bounded independently; on timeout it substitutes its
/// documented default instead of stalling the pipeline.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProbeTimeouts {
    /// DNS query timeout.
    pub dns_secs: u64,
    /// Redirect-chain walk timeout.
    pub redirect_secs: u64,
    /// RDAP registration-data lookup timeout.
    pub domain_age_secs: u64,
    /// TCP connect phase of the TLS reachability check.
    pub tcp_connect_secs: u64,
    /// TLS handshake phase of the TLS reachability check.
    pub tls_handshake_secs: u64,
    /// IP reputation lookup timeout.
    pub reputation_secs: u64,
}

impl Default for ProbeTimeouts {
    fn default() -> Self {
        Self {
            dns_secs: DNS_TIMEOUT_SECS,
            redirect_secs: REDIRECT_PROBE_TIMEOUT_SECS,
            domain_age_secs: DOMAIN_AGE_TIMEOUT_SECS,
            tcp_connect_secs: TCP_CONNECT_TIMEOUT_SECS,
            tls_handshake_secs: TLS_HANDSHAKE_TIMEOUT_SECS,
            reputation_secs: REPUTATION_TIMEOUT_SECS,
        }
    }
}

impl ProbeTimeouts {
    /// DNS query timeout as a [`Duration`].
    pub fn dns(&self) -> Duration {
        Duration::from_secs(self.dns_secs)
    }

    /// Redirect probe timeout as a [`Duration`].
    pub fn redirect(&self) -> Duration {
        Duration::from_secs(self.redirect_secs)
    }

    /// Domain-age probe timeout as a [`Duration`].
    pub fn domain_age(&self) -> Duration {
        Duration::from_secs(self.domain_age_secs)
    }

    /// TCP connect timeout as a [`Duration`].
    pub fn tcp_connect(&self) -> Duration {
        Duration::from_secs(self.tcp_connect_secs)
    }

    /// TLS handshake timeout as a [`Duration`].
    pub fn tls_handshake(&self) -> Duration {
        Duration::from_secs(self.tls_handshake_secs)
    }

    /// Reputation probe timeout as a [`Duration`].
    pub fn reputation(&self) -> Duration {
        Duration::from_secs(self.reputation_secs)
    }
}

/// Complete engine configuration.
///
/// Owned by the [`crate::engine::ScanEngine`] instance that is constructed
/// from it; there is no process-global configuration state.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Scoring weights.
    pub weights: ScoringWeights,
    /// Classification thresholds.
    pub thresholds: Thresholds,
    /// Case-insensitive keyword vocabulary matched against the whole URL.
    pub suspicious_words: Vec<String>,
    /// Known URL-shortener domains (host substring membership).
    pub shortener_domains: Vec<String>,
    /// Known-safe root domains that short-circuit the pipeline.
    pub allowlist_domains: Vec<String>,
    /// Per-collector timeout ceilings.
    pub timeouts: ProbeTimeouts,
    /// Abuse confidence score above which an IP counts as blacklisted.
    pub reputation_confidence_threshold: u32,
    /// IP reputation API endpoint (AbuseIPDB-compatible `check` endpoint).
    pub reputation_endpoint: String,
    /// Reputation API key. `None` disables the probe (degrades to false).
    /// Populated from `ABUSEIPDB_API_KEY` when absent from the config file.
    pub reputation_api_key: Option<String>,
    /// RDAP endpoint queried for domain registration data.
    pub rdap_endpoint: String,
    /// HTTP User-Agent for all outbound requests.
    pub user_agent: String,
    /// Per-request HTTP client timeout in seconds.
    pub http_timeout_secs: u64,
    /// Maximum concurrent scans in a batch.
    pub max_concurrency: usize,
    /// Resolve hosts through the OS resolver instead of hickory.
    pub use_system_dns: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            thresholds: Thresholds::default(),
            suspicious_words: default_suspicious_words(),
            shortener_domains: default_shortener_domains(),
            allowlist_domains: default_allowlist_domains(),
            timeouts: ProbeTimeouts::default(),
            reputation_confidence_threshold: 50,
            reputation_endpoint: DEFAULT_REPUTATION_ENDPOINT.to_string(),
            reputation_api_key: std::env::var(REPUTATION_API_KEY_ENV).ok(),
            rdap_endpoint: DEFAULT_RDAP_ENDPOINT.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            use_system_dns: false,
        }
    }
}

impl EngineConfig {
    /// Loads configuration overrides from a JSON file.
    ///
    /// Fields absent from the file keep their defaults, so a file containing
    /// only `{"thresholds": {"phishing": 0.5}}` is a valid override.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid JSON.
    pub fn from_json_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read config file {}: {}", path.display(), e))?;
        let config: EngineConfig = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config file {}: {}", path.display(), e))?;
        Ok(config)
    }
}

fn default_suspicious_words() -> Vec<String> {
    ["login", "signin", "account", "bank", "confirm", "secure", "paypal"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_shortener_domains() -> Vec<String> {
    [
        "bit.ly", "tinyurl.com", "t.co", "goo.gl", "is.gd", "cli.gs", "pic.gd", "dwarfurl.com",
        "ow.ly", "yfrog.com", "migre.me", "ff.im", "tiny.cc", "url4.eu", "tr.im", "twit.ac",
        "su.pr", "twurl.nl", "snipurl.com", "short.to", "budurl.com", "ping.fm", "post.ly",
        "just.as", "bkite.com", "snipr.com", "fic.kr", "loopt.us", "doiop.com",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_allowlist_domains() -> Vec<String> {
    [
        "google.com",
        "microsoft.com",
        "apple.com",
        "amazon.com",
        "facebook.com",
        "github.com",
        "linkedin.com",
        "twitter.com",
        "instagram.com",
        "youtube.com",
        "netflix.com",
        "spotify.com",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_match_documented_table() {
        let w = ScoringWeights::default();
        assert_eq!(w.suspicious_words, 0.30);
        assert_eq!(w.shortened_url, 0.20);
        assert_eq!(w.many_redirects, 0.15);
        assert_eq!(w.no_dns_record, 0.10);
        assert_eq!(w.young_domain, 0.15);
        assert_eq!(w.no_ssl, 0.05);
        assert_eq!(w.blacklisted_ip, 0.05);
        assert_eq!(w.redirect_threshold, 2);
        assert_eq!(w.young_domain_days, 30);
    }

    #[test]
    fn test_default_thresholds() {
        let t = Thresholds::default();
        assert_eq!(t.suspicious, 0.30);
        assert_eq!(t.phishing, 0.60);
    }

    #[test]
    fn test_default_vocabulary_contains_login() {
        let config = EngineConfig::default();
        assert!(config.suspicious_words.iter().any(|w| w == "login"));
        assert_eq!(config.suspicious_words.len(), 7);
    }

    #[test]
    fn test_partial_json_override_keeps_defaults() {
        let config: EngineConfig =
            serde_json::from_str(r#"{"thresholds": {"phishing": 0.5}}"#).unwrap();
        assert_eq!(config.thresholds.phishing, 0.5);
        // Unspecified fields keep their defaults
        assert_eq!(config.thresholds.suspicious, 0.30);
        assert_eq!(config.weights.suspicious_words, 0.30);
        assert!(!config.shortener_domains.is_empty());
    }

    #[test]
    fn test_probe_timeout_durations() {
        let t = ProbeTimeouts::default();
        assert_eq!(t.dns(), Duration::from_secs(3));
        assert_eq!(t.tcp_connect(), Duration::from_secs(5));
        assert_eq!(t.tls_handshake(), Duration::from_secs(5));
    }
}
