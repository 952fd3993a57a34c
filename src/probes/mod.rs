//! Network signal collectors.
//!
//! Six independent, order-insensitive probes, each bounded by its own timeout
//! and each degrading to a documented default on failure rather than aborting
//! the pipeline. No probe's result depends on another's; they run concurrently
//! and partial failures never block the siblings.

pub mod dns;
pub mod domain_age;
pub mod redirects;
pub mod reputation;
pub mod shortener;
pub mod tls;

use crate::config::EngineConfig;
use crate::error_handling::{InfoType, ProcessingStats, WarningType};

pub use dns::{DnsLookup, HickoryDns, SystemDns};

/// Outcome of a single collector.
///
/// Errors never cross a collector boundary: a probe that cannot reach its
/// signal source reports `Degraded` carrying its documented default plus the
/// reason, and aggregation consumes the value either way.
#[derive(Debug, Clone, PartialEq)]
pub enum ProbeOutcome<T> {
    /// The probe observed a real signal.
    Success(T),
    /// The probe substituted its documented default.
    Degraded {
        /// The default value standing in for the missing signal.
        value: T,
        /// Why the signal was unavailable (for logging, not for callers).
        reason: String,
    },
}

impl<T> ProbeOutcome<T> {
    /// Wraps a failure into a degraded outcome with the given default.
    pub fn degraded(value: T, reason: impl Into<String>) -> Self {
        ProbeOutcome::Degraded {
            value,
            reason: reason.into(),
        }
    }

    /// The carried value, real or substituted.
    pub fn value(&self) -> &T {
        match self {
            ProbeOutcome::Success(value) => value,
            ProbeOutcome::Degraded { value, .. } => value,
        }
    }

    /// Consumes the outcome, yielding the carried value.
    pub fn into_value(self) -> T {
        match self {
            ProbeOutcome::Success(value) => value,
            ProbeOutcome::Degraded { value, .. } => value,
        }
    }

    /// True if the probe substituted its default.
    pub fn is_degraded(&self) -> bool {
        matches!(self, ProbeOutcome::Degraded { .. })
    }

    /// The degradation reason, if any.
    pub fn degraded_reason(&self) -> Option<&str> {
        match self {
            ProbeOutcome::Success(_) => None,
            ProbeOutcome::Degraded { reason, .. } => Some(reason),
        }
    }
}

/// Shared resources the collectors borrow for one scan.
pub struct SignalContext<'a> {
    /// HTTP client with redirects enabled (RDAP, reputation).
    pub client: &'a reqwest::Client,
    /// HTTP client with redirects disabled (manual chain walking).
    pub redirect_client: &'a reqwest::Client,
    /// DNS capability, selected at engine construction.
    pub dns: &'a dyn DnsLookup,
    /// Engine configuration (timeouts, endpoints, thresholds).
    pub config: &'a EngineConfig,
    /// Degradation counters.
    pub stats: &'a ProcessingStats,
}

/// Collected outputs of all six probes for one URL.
#[derive(Debug, Clone)]
pub struct NetworkSignals {
    /// Host matches the shortener list. Pure membership test; never degrades.
    pub shortened_url: bool,
    /// Redirect hops observed; defaults to 0.
    pub redirect_count: ProbeOutcome<u32>,
    /// Registrable domain resolves; defaults to false.
    pub has_dns_record: ProbeOutcome<bool>,
    /// Domain age in days; defaults to 0 ("very new", maximally suspicious).
    pub domain_age_days: ProbeOutcome<u32>,
    /// Host answers TLS; defaults to false.
    pub has_ssl: ProbeOutcome<bool>,
    /// Resolved address flagged by the reputation source; defaults to false.
    pub blacklisted_ip: ProbeOutcome<bool>,
}

/// Runs all six collectors concurrently and joins their outcomes.
///
/// Total latency is bounded by the slowest single probe rather than the sum:
/// each probe carries its own timeout and the six futures are joined, not
/// sequenced. `registrable_domain` is `None` when the host is an IP literal
/// or extraction failed; the domain-scoped probes then degrade immediately.
pub async fn collect_signals(
    ctx: &SignalContext<'_>,
    url: &str,
    host: &str,
    registrable_domain: Option<&str>,
) -> NetworkSignals {
    let shortened_url = shortener::is_shortened_host(host, &ctx.config.shortener_domains);

    let (redirect_count, has_dns_record, domain_age_days, has_ssl, blacklisted_ip) = tokio::join!(
        redirects::count_redirects(ctx.redirect_client, url, ctx.config.timeouts.redirect()),
        dns::check_dns_record(ctx.dns, registrable_domain, ctx.config.timeouts.dns()),
        domain_age::lookup_domain_age(ctx.client, ctx.config, registrable_domain),
        tls::check_tls_reachability(host, &ctx.config.timeouts),
        reputation::check_ip_reputation(ctx.client, ctx.dns, ctx.config, registrable_domain),
    );

    if shortened_url {
        ctx.stats.increment_info(InfoType::ShortenerDetected);
    }
    if *redirect_count.value() > ctx.config.weights.redirect_threshold {
        ctx.stats.increment_info(InfoType::ManyRedirects);
    }
    record_degradation(ctx.stats, &redirect_count, WarningType::RedirectProbeDegraded, host);
    record_degradation(ctx.stats, &has_dns_record, WarningType::DnsProbeDegraded, host);
    record_degradation(
        ctx.stats,
        &domain_age_days,
        WarningType::DomainAgeProbeDegraded,
        host,
    );
    record_degradation(ctx.stats, &has_ssl, WarningType::TlsProbeDegraded, host);
    record_degradation(
        ctx.stats,
        &blacklisted_ip,
        WarningType::ReputationProbeDegraded,
        host,
    );

    NetworkSignals {
        shortened_url,
        redirect_count,
        has_dns_record,
        domain_age_days,
        has_ssl,
        blacklisted_ip,
    }
}

fn record_degradation<T>(
    stats: &ProcessingStats,
    outcome: &ProbeOutcome<T>,
    warning: WarningType,
    host: &str,
) {
    if let Some(reason) = outcome.degraded_reason() {
        log::debug!("{} for {}: {}", warning.as_str(), host, reason);
        stats.increment_warning(warning);
    }
}
