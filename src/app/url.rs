//! URL validation and normalization.

use crate::config::MAX_URL_LENGTH;
use crate::error_handling::ScanError;

/// A raw input URL after normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedUrl {
    /// The normalized absolute URL string.
    pub url: String,
    /// The lower-cased host component.
    pub host: String,
}

/// Validates and normalizes a raw URL string.
///
/// Adds an `https://` prefix if no scheme is present, then validates that the
/// result parses as an http/https URL with a non-empty host. Rejects input
/// longer than [`MAX_URL_LENGTH`].
///
/// # Errors
///
/// Returns [`ScanError::InvalidUrl`] if the input is too long, fails to parse,
/// uses an unsupported scheme, or has no host.
pub fn normalize_url(raw: &str) -> Result<NormalizedUrl, ScanError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ScanError::InvalidUrl("empty input".to_string()));
    }
    if trimmed.len() > MAX_URL_LENGTH {
        return Err(ScanError::InvalidUrl(format!(
            "URL exceeds maximum length ({} > {})",
            trimmed.len(),
            MAX_URL_LENGTH
        )));
    }

    // Normalize: add https:// prefix if missing
    let normalized = if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
        format!("https://{trimmed}")
    } else {
        trimmed.to_string()
    };

    if normalized.len() > MAX_URL_LENGTH {
        return Err(ScanError::InvalidUrl(format!(
            "URL exceeds maximum length after normalization ({} > {})",
            normalized.len(),
            MAX_URL_LENGTH
        )));
    }

    let parsed = url::Url::parse(&normalized)
        .map_err(|e| ScanError::InvalidUrl(format!("{trimmed}: {e}")))?;

    match parsed.scheme() {
        "http" | "https" => {}
        other => {
            return Err(ScanError::InvalidUrl(format!(
                "unsupported scheme '{other}'"
            )))
        }
    }

    let host = parsed
        .host_str()
        .filter(|h| !h.is_empty())
        .ok_or_else(|| ScanError::InvalidUrl(format!("{trimmed}: no host component")))?
        .to_lowercase();

    Ok(NormalizedUrl {
        url: normalized,
        host,
    })
}
