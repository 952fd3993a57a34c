//! Error type definitions.
//!
//! This module defines all error, warning, and info types used throughout the engine.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Errors surfaced to the caller of a scan.
///
/// Probe failures are never represented here: a collector that cannot reach
/// its signal source degrades to its documented default instead of erroring.
#[derive(Error, Debug)]
pub enum ScanError {
    /// The input could not be normalized into a well-formed http(s) URL.
    /// Surfaced as a rejection (4xx-equivalent), never retried.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// Error initializing the DNS resolver.
    #[error("DNS resolver initialization error: {0}")]
    DnsResolverError(String),
}

/// Types of errors that can occur during scan processing.
///
/// These are actual failure conditions, as opposed to probe degradations
/// (tracked as [`WarningType`]) which the pipeline absorbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    /// Input rejected by the normalizer.
    InvalidUrl,
    /// Page body could not be fetched for content analysis.
    ContentFetchError,
}

/// Types of probe degradations.
///
/// A degraded probe substituted its documented default; the scan still
/// completed. Tracked for operability, never surfaced as a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
#[allow(clippy::enum_variant_names)] // All variants end with "Degraded" by design
pub enum WarningType {
    /// DNS resolution failed or timed out.
    DnsProbeDegraded,
    /// Registration-data lookup failed or timed out.
    DomainAgeProbeDegraded,
    /// TLS reachability check failed or timed out.
    TlsProbeDegraded,
    /// Redirect chain walk failed or timed out.
    RedirectProbeDegraded,
    /// Reputation lookup failed, timed out, or was unconfigured.
    ReputationProbeDegraded,
}

/// Notable events that are neither errors nor degradations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum InfoType {
    /// A host matched the known-safe allowlist and bypassed probing.
    AllowlistShortCircuit,
    /// A host matched the shortener domain list.
    ShortenerDetected,
    /// A redirect chain exceeded the scoring threshold.
    ManyRedirects,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    /// Returns a human-readable string representation of the error type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::InvalidUrl => "Invalid URL",
            ErrorType::ContentFetchError => "Content fetch error",
        }
    }
}

impl WarningType {
    /// Returns a human-readable string representation of the warning type.
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningType::DnsProbeDegraded => "DNS probe degraded",
            WarningType::DomainAgeProbeDegraded => "Domain age probe degraded",
            WarningType::TlsProbeDegraded => "TLS probe degraded",
            WarningType::RedirectProbeDegraded => "Redirect probe degraded",
            WarningType::ReputationProbeDegraded => "Reputation probe degraded",
        }
    }
}

impl InfoType {
    /// Returns a human-readable string representation of the info type.
    pub fn as_str(&self) -> &'static str {
        match self {
            InfoType::AllowlistShortCircuit => "Allowlist short circuit",
            InfoType::ShortenerDetected => "Shortener detected",
            InfoType::ManyRedirects => "Many redirects",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_scan_error_display() {
        let err = ScanError::InvalidUrl("not a url".to_string());
        assert_eq!(err.to_string(), "Invalid URL: not a url");
    }

    #[test]
    fn test_all_error_types_have_string_representation() {
        for error_type in ErrorType::iter() {
            assert!(
                !error_type.as_str().is_empty(),
                "{:?} should have non-empty string",
                error_type
            );
        }
    }

    #[test]
    fn test_all_warning_types_have_string_representation() {
        for warning_type in WarningType::iter() {
            assert!(
                !warning_type.as_str().is_empty(),
                "{:?} should have non-empty string",
                warning_type
            );
        }
    }

    #[test]
    fn test_all_info_types_have_string_representation() {
        for info_type in InfoType::iter() {
            assert!(
                !info_type.as_str().is_empty(),
                "{:?} should have non-empty string",
                info_type
            );
        }
    }

    #[test]
    fn test_warning_type_equality() {
        assert_eq!(WarningType::DnsProbeDegraded, WarningType::DnsProbeDegraded);
        assert_ne!(WarningType::DnsProbeDegraded, WarningType::TlsProbeDegraded);
    }
}
