//! IP reputation probe.
//!
//! Resolves the registrable domain to an address, then queries an
//! AbuseIPDB-compatible reputation endpoint. The address is flagged when its
//! abuse confidence score exceeds the configured threshold. Degrades to
//! `false` on any failure: absent DNS record, missing API key, unreachable
//! service, or timeout.

use std::net::IpAddr;

use serde::Deserialize;

use crate::config::EngineConfig;

use super::{DnsLookup, ProbeOutcome};

#[derive(Debug, Deserialize)]
struct ReputationResponse {
    data: ReputationData,
}

#[derive(Debug, Deserialize)]
struct ReputationData {
    #[serde(rename = "abuseConfidenceScore", default)]
    abuse_confidence_score: u32,
}

/// Checks whether the resolved address is flagged by the reputation source.
pub async fn check_ip_reputation(
    client: &reqwest::Client,
    dns: &dyn DnsLookup,
    config: &EngineConfig,
    registrable_domain: Option<&str>,
) -> ProbeOutcome<bool> {
    let Some(domain) = registrable_domain else {
        return ProbeOutcome::degraded(false, "no registrable domain");
    };
    let Some(api_key) = config.reputation_api_key.as_deref() else {
        return ProbeOutcome::degraded(false, "reputation API key not configured");
    };

    let timeout = config.timeouts.reputation();
    match tokio::time::timeout(timeout, query_reputation(client, dns, config, domain, api_key))
        .await
    {
        Ok(Ok(confidence)) => {
            ProbeOutcome::Success(confidence > config.reputation_confidence_threshold)
        }
        Ok(Err(e)) => ProbeOutcome::degraded(false, format!("lookup failed: {e}")),
        Err(_) => ProbeOutcome::degraded(false, format!("timed out after {timeout:?}")),
    }
}

async fn query_reputation(
    client: &reqwest::Client,
    dns: &dyn DnsLookup,
    config: &EngineConfig,
    domain: &str,
    api_key: &str,
) -> anyhow::Result<u32> {
    let ip: IpAddr = dns.resolve_first_ip(domain).await?;

    let response: ReputationResponse = client
        .get(&config.reputation_endpoint)
        .query(&[("ipAddress", ip.to_string())])
        .header("Key", api_key)
        .header(reqwest::header::ACCEPT, "application/json")
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    Ok(response.data.abuse_confidence_score)
}
