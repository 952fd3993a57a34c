//! Configuration constants.
//!
//! This module defines all operational constants used throughout the engine,
//! including timeouts, size limits, and other fixed parameters. Tunable
//! scoring knobs live in [`crate::config::scoring`] instead.

/// Maximum URL length accepted by the normalizer (2048 characters).
/// Matches common browser and server limits; longer input is rejected
/// as invalid rather than probed.
pub const MAX_URL_LENGTH: usize = 2048;

/// Default maximum concurrent scans for batch processing (semaphore limit).
pub const DEFAULT_MAX_CONCURRENCY: usize = 30;

// Network operation timeouts (probe defaults; overridable via ProbeTimeouts)
/// DNS query timeout in seconds. Most queries complete in under a second;
/// 3s provides buffer while failing fast on unresponsive servers.
pub const DNS_TIMEOUT_SECS: u64 = 3;
/// TCP connection timeout in seconds for the TLS reachability probe.
pub const TCP_CONNECT_TIMEOUT_SECS: u64 = 5;
/// TLS handshake timeout in seconds for the TLS reachability probe.
pub const TLS_HANDSHAKE_TIMEOUT_SECS: u64 = 5;
/// Redirect-chain probe timeout in seconds, covering the whole chain walk.
pub const REDIRECT_PROBE_TIMEOUT_SECS: u64 = 10;
/// RDAP registration-data lookup timeout in seconds.
pub const DOMAIN_AGE_TIMEOUT_SECS: u64 = 8;
/// IP reputation lookup timeout in seconds (resolution + API call).
pub const REPUTATION_TIMEOUT_SECS: u64 = 8;

/// Default per-request timeout for the shared HTTP client, in seconds.
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// Maximum number of redirect hops the redirect counter follows.
/// Prevents infinite redirect loops and excessive request chains.
pub const MAX_REDIRECT_HOPS: usize = 10;

/// Maximum response body size for content analysis (2MB).
/// Bodies larger than this are truncated to prevent memory exhaustion.
pub const MAX_RESPONSE_BODY_SIZE: usize = 2 * 1024 * 1024;

/// Domain age, in days, assigned to allowlisted hosts. Large enough that the
/// "newly registered" weight never fires for a short-circuited scan.
pub const ALLOWLISTED_DOMAIN_AGE_DAYS: u32 = 1000;

/// Default RDAP bootstrap endpoint for registration-data lookups.
pub const DEFAULT_RDAP_ENDPOINT: &str = "https://rdap.org/domain";

/// Default IP reputation API endpoint (AbuseIPDB-compatible).
pub const DEFAULT_REPUTATION_ENDPOINT: &str = "https://api.abuseipdb.com/api/v2/check";

/// Environment variable holding the reputation API key.
pub const REPUTATION_API_KEY_ENV: &str = "ABUSEIPDB_API_KEY";

/// Default User-Agent string for HTTP requests.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";
