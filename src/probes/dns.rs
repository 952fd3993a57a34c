//! DNS resolution capability and record-presence probe.
//!
//! Resolution is modeled as a capability trait with two interchangeable
//! implementations selected at engine construction time, both honoring the
//! same default-on-failure contract:
//!
//! - [`HickoryDns`] — hickory-resolver with aggressive timeouts
//! - [`SystemDns`] — the OS resolver via `tokio::net::lookup_host`

use std::net::IpAddr;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use hickory_resolver::TokioAsyncResolver;

use super::ProbeOutcome;

/// Hostname-to-address resolution capability.
#[async_trait]
pub trait DnsLookup: Send + Sync {
    /// Resolves a hostname to its first address.
    ///
    /// # Errors
    ///
    /// Returns an error if resolution fails or yields no addresses.
    async fn resolve_first_ip(&self, host: &str) -> Result<IpAddr>;
}

/// DNS resolution backed by hickory-resolver.
pub struct HickoryDns {
    resolver: TokioAsyncResolver,
}

impl HickoryDns {
    /// Creates a resolver with the default upstream configuration and
    /// fail-fast options (bounded query timeout, 2 attempts, ndots 0 to
    /// prevent search-domain appending).
    pub fn new(query_timeout: Duration) -> Self {
        use hickory_resolver::config::{ResolverConfig, ResolverOpts};

        let mut opts = ResolverOpts::default();
        opts.timeout = query_timeout;
        opts.attempts = 2;
        opts.ndots = 0;

        Self {
            resolver: TokioAsyncResolver::tokio(ResolverConfig::default(), opts),
        }
    }
}

#[async_trait]
impl DnsLookup for HickoryDns {
    async fn resolve_first_ip(&self, host: &str) -> Result<IpAddr> {
        let response = self.resolver.lookup_ip(host).await?;
        response
            .iter()
            .next()
            .ok_or_else(|| anyhow::anyhow!("No addresses found for {}", host))
    }
}

/// DNS resolution through the operating system resolver.
///
/// Fallback implementation for environments where direct upstream queries
/// are blocked; goes through `getaddrinfo` semantics via tokio.
pub struct SystemDns;

#[async_trait]
impl DnsLookup for SystemDns {
    async fn resolve_first_ip(&self, host: &str) -> Result<IpAddr> {
        // lookup_host requires a port; it is discarded from the result
        let mut addrs = tokio::net::lookup_host((host, 0)).await?;
        addrs
            .next()
            .map(|sock| sock.ip())
            .ok_or_else(|| anyhow::anyhow!("No addresses found for {}", host))
    }
}

/// DNS record presence probe.
///
/// Resolves the registrable domain and reports whether any address exists.
/// Degrades to `false` (no record) on resolution failure, timeout, or when
/// no registrable domain is available (IP-literal hosts).
pub async fn check_dns_record(
    dns: &dyn DnsLookup,
    registrable_domain: Option<&str>,
    timeout: Duration,
) -> ProbeOutcome<bool> {
    let Some(domain) = registrable_domain else {
        return ProbeOutcome::degraded(false, "no registrable domain");
    };

    match tokio::time::timeout(timeout, dns.resolve_first_ip(domain)).await {
        Ok(Ok(_)) => ProbeOutcome::Success(true),
        Ok(Err(e)) => ProbeOutcome::degraded(false, format!("resolution failed: {e}")),
        Err(_) => ProbeOutcome::degraded(false, format!("timed out after {timeout:?}")),
    }
}
