//! Pure structural analysis of URL syntax.
//!
//! Computes character counts, suspicious-keyword hits, and structural anomaly
//! patterns over the normalized URL. Never performs I/O and never fails on
//! well-formed input (malformed input is rejected by the normalizer first).

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

static IP_IN_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}")
        .expect("hardcoded IP pattern must compile")
});

static SENSITIVE_KEYWORDS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(password|login|signin|bank|account|secure|update|verify)")
        .expect("hardcoded keyword pattern must compile")
});

static UNUSUAL_CHARS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^a-zA-Z0-9\-._~:/?#\[\]@!$&'()*+,;=]")
        .expect("hardcoded charset pattern must compile")
});

/// Output of the structural analyzer.
///
/// All fields derive from the URL string and its parsed components alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuralReport {
    /// Character count of the normalized URL.
    pub url_length: u32,
    /// Count of `.` characters.
    pub dots_count: u32,
    /// Count of digit characters.
    pub numeric_chars: u32,
    /// Count of non-alphanumeric, non-dot characters.
    pub special_chars: u32,
    /// Count of matched vocabulary keywords (one per distinct keyword).
    pub suspicious_words: u32,
    /// Number of subdomain labels on the host.
    pub subdomain_count: u32,
    /// Number of non-empty path segments.
    pub path_depth: u32,
    /// Whether the URL carries an explicit port.
    pub has_port: bool,
    /// Whether the URL embeds credentials.
    pub has_credentials: bool,
    /// Human-readable descriptions of matched anomaly patterns.
    pub suspicious_patterns: Vec<String>,
}

/// Analyzes the structure of a normalized URL.
///
/// `parsed` must be the parse of `url`; the normalizer guarantees both exist
/// for any URL that reaches this stage.
pub fn analyze(url: &str, parsed: &Url, vocabulary: &[String]) -> StructuralReport {
    let lowercased = url.to_lowercase();

    let suspicious_words = vocabulary
        .iter()
        .filter(|word| lowercased.contains(word.to_lowercase().as_str()))
        .count() as u32;

    let host = parsed.host_str().unwrap_or("");
    // Labels beyond the registrable pair count as subdomains
    let subdomain_count = host.split('.').count().saturating_sub(2) as u32;

    let path_depth = parsed
        .path()
        .split('/')
        .filter(|segment| !segment.is_empty())
        .count() as u32;

    let has_credentials = !parsed.username().is_empty() || parsed.password().is_some();

    let mut suspicious_patterns = Vec::new();
    if url.contains('@') {
        suspicious_patterns.push("URL contains @ symbol".to_string());
    }
    if parsed.path().contains("//") {
        suspicious_patterns.push("Repeated path separators".to_string());
    }
    if IP_IN_URL_RE.is_match(url) {
        suspicious_patterns.push("IP address in URL".to_string());
    }
    if SENSITIVE_KEYWORDS_RE.is_match(url) {
        suspicious_patterns.push("Suspicious keywords".to_string());
    }
    if UNUSUAL_CHARS_RE.is_match(url) {
        suspicious_patterns.push("Unusual characters in URL".to_string());
    }

    StructuralReport {
        url_length: url.chars().count() as u32,
        dots_count: url.chars().filter(|c| *c == '.').count() as u32,
        numeric_chars: url.chars().filter(|c| c.is_ascii_digit()).count() as u32,
        special_chars: url
            .chars()
            .filter(|c| !c.is_ascii_alphanumeric() && *c != '.')
            .count() as u32,
        suspicious_words,
        subdomain_count,
        path_depth,
        has_port: parsed.port().is_some(),
        has_credentials,
        suspicious_patterns,
    }
}
