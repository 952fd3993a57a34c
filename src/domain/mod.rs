//! Registrable-domain extraction.
//!
//! Uses the Public Suffix List (via `tldextract`) to reduce a host to its
//! registrable domain (e.g. `example.com` from `shop.example.com`), handling
//! both simple TLDs and multi-part TLDs (e.g. `example.co.uk`).

use anyhow::{Context, Result};
use tldextract::TldExtractor;

/// Extracts the registrable domain from a URL.
///
/// # Errors
///
/// Returns an error if the URL cannot be parsed, has no host, is an IP
/// address literal (IPs have no registrable domain), or extraction fails.
pub fn extract_registrable_domain(extractor: &TldExtractor, url: &str) -> Result<String> {
    let parsed = url::Url::parse(url).with_context(|| format!("Failed to parse URL: {}", url))?;

    let host = parsed
        .host_str()
        .ok_or_else(|| anyhow::anyhow!("URL '{}' has no host component", url))?;

    // IP literals have no registrable domain
    if host.parse::<std::net::Ipv4Addr>().is_ok()
        || host.parse::<std::net::Ipv6Addr>().is_ok()
        || parsed
            .host()
            .map(|h| matches!(h, url::Host::Ipv4(_) | url::Host::Ipv6(_)))
            .unwrap_or(false)
    {
        return Err(anyhow::anyhow!(
            "IP addresses do not have registrable domains: {}",
            host
        ));
    }

    let result = extractor
        .extract(url)
        .with_context(|| format!("Failed to extract domain from URL: {}", url))?;

    match (result.domain, result.suffix) {
        (Some(domain), Some(suffix)) => Ok(format!("{}.{}", domain, suffix)),
        (Some(domain), None) => Ok(domain),
        (None, Some(suffix)) => Ok(suffix),
        (None, None) => Err(anyhow::anyhow!("No domain or suffix found in URL: {}", url)),
    }
}
