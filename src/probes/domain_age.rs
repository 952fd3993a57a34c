//! Domain age lookup via RDAP registration data.
//!
//! Queries the configured RDAP endpoint for the registrable domain and
//! computes the age in days from the registration event to now. Degrades to
//! 0 days on missing or unavailable data — a deliberate fail-safe bias: an
//! unknown registration date is treated as "very new", i.e. maximally
//! suspicious.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::config::EngineConfig;

use super::ProbeOutcome;

#[derive(Debug, Deserialize)]
struct RdapResponse {
    #[serde(default)]
    events: Vec<RdapEvent>,
}

#[derive(Debug, Deserialize)]
struct RdapEvent {
    #[serde(rename = "eventAction")]
    event_action: String,
    #[serde(rename = "eventDate")]
    event_date: Option<String>,
}

/// Looks up the domain age in days.
///
/// Degrades to 0 when no registrable domain is available, the RDAP query
/// fails or times out, or the response carries no parseable registration
/// event.
pub async fn lookup_domain_age(
    client: &reqwest::Client,
    config: &EngineConfig,
    registrable_domain: Option<&str>,
) -> ProbeOutcome<u32> {
    let Some(domain) = registrable_domain else {
        return ProbeOutcome::degraded(0, "no registrable domain");
    };

    let timeout = config.timeouts.domain_age();
    match tokio::time::timeout(timeout, fetch_registration_date(client, config, domain)).await {
        Ok(Ok(creation)) => {
            let age_days = (Utc::now() - creation).num_days().max(0) as u32;
            ProbeOutcome::Success(age_days)
        }
        Ok(Err(e)) => ProbeOutcome::degraded(0, format!("lookup failed: {e}")),
        Err(_) => ProbeOutcome::degraded(0, format!("timed out after {timeout:?}")),
    }
}

async fn fetch_registration_date(
    client: &reqwest::Client,
    config: &EngineConfig,
    domain: &str,
) -> anyhow::Result<DateTime<Utc>> {
    let url = format!("{}/{}", config.rdap_endpoint.trim_end_matches('/'), domain);
    log::debug!("RDAP lookup for {domain}: {url}");

    let response: RdapResponse = client
        .get(&url)
        .header(reqwest::header::ACCEPT, "application/rdap+json")
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    let registration = response
        .events
        .iter()
        .find(|event| event.event_action == "registration")
        .and_then(|event| event.event_date.as_deref())
        .ok_or_else(|| anyhow::anyhow!("no registration event for {}", domain))?;

    parse_event_date(registration)
        .ok_or_else(|| anyhow::anyhow!("unparseable registration date: {}", registration))
}

/// Parses an RDAP event date, preferring RFC 3339 with a few WHOIS-style
/// fallbacks seen in the wild.
fn parse_event_date(date_str: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(date_str) {
        return Some(dt.with_timezone(&Utc));
    }

    let formats = ["%Y-%m-%dT%H:%M:%SZ", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d"];
    for format in &formats {
        if let Ok(naive_dt) = chrono::NaiveDateTime::parse_from_str(date_str, format) {
            return Some(naive_dt.and_utc());
        }
        if let Ok(naive_date) = chrono::NaiveDate::parse_from_str(date_str, format) {
            return Some(naive_date.and_hms_opt(0, 0, 0)?.and_utc());
        }
    }

    None
}
