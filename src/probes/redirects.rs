//! Redirect chain counting.
//!
//! Walks the redirect chain manually with a redirect-disabled client so each
//! hop is observed, up to [`MAX_REDIRECT_HOPS`]. Degrades to 0 hops on any
//! network error or timeout.

use std::time::Duration;

use anyhow::Result;
use reqwest::Url;

use crate::config::MAX_REDIRECT_HOPS;

use super::ProbeOutcome;

/// Counts redirect hops for a URL.
///
/// The whole chain walk is bounded by `timeout`; on error or timeout the
/// probe degrades to a count of 0.
pub async fn count_redirects(
    client: &reqwest::Client,
    url: &str,
    timeout: Duration,
) -> ProbeOutcome<u32> {
    match tokio::time::timeout(timeout, walk_redirect_chain(client, url)).await {
        Ok(Ok(hops)) => ProbeOutcome::Success(hops),
        Ok(Err(e)) => ProbeOutcome::degraded(0, format!("request failed: {e}")),
        Err(_) => ProbeOutcome::degraded(0, format!("timed out after {timeout:?}")),
    }
}

/// Follows `Location` headers until a non-redirect response or the hop limit.
async fn walk_redirect_chain(client: &reqwest::Client, start_url: &str) -> Result<u32> {
    let mut current = start_url.to_string();
    let mut hops = 0u32;

    for _ in 0..MAX_REDIRECT_HOPS {
        let resp = client.get(&current).send().await?;

        let status = resp.status().as_u16();
        if matches!(status, 301 | 302 | 303 | 307 | 308) {
            let Some(loc) = resp.headers().get(reqwest::header::LOCATION) else {
                // Redirect status without a Location header; chain ends here
                log::warn!("Redirect status {} for {} but no Location header", status, current);
                break;
            };
            let loc = loc.to_str().unwrap_or("").to_string();
            // Location may be relative; resolve against the current URL
            let next = Url::parse(&loc)
                .or_else(|_| Url::parse(&current).and_then(|base| base.join(&loc)))?;
            current = next.to_string();
            hops += 1;
        } else {
            break;
        }
    }

    Ok(hops)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unreachable_host_degrades_to_zero() {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .timeout(Duration::from_secs(1))
            .build()
            .unwrap();
        let outcome = count_redirects(
            &client,
            "https://no-such-host.invalid/",
            Duration::from_secs(2),
        )
        .await;
        assert!(outcome.is_degraded());
        assert_eq!(outcome.into_value(), 0);
    }
}
