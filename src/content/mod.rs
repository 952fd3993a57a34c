//! Optional page-content analysis.
//!
//! Fetches the page body at the target URL (bounded size), extracts hyperlink
//! targets and form elements, and flags any form containing a password-type
//! input. Runs only when deep scanning is requested; its result is reported
//! alongside the risk score, never merged into it. A fetch failure produces
//! an empty, error-flagged result rather than failing the request.

use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::config::MAX_RESPONSE_BODY_SIZE;
use crate::models::{ContentAnalysis, SuspiciousForm};

const ANCHOR_SELECTOR_STR: &str = "a";
const FORM_SELECTOR_STR: &str = "form";
const PASSWORD_INPUT_SELECTOR_STR: &str = "input[type='password']";

static ANCHOR_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(ANCHOR_SELECTOR_STR).expect("hardcoded anchor selector must parse")
});

static FORM_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(FORM_SELECTOR_STR).expect("hardcoded form selector must parse")
});

static PASSWORD_INPUT_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(PASSWORD_INPUT_SELECTOR_STR)
        .expect("hardcoded password input selector must parse")
});

/// Fetches and analyzes the page at `url`.
///
/// The body is truncated at [`MAX_RESPONSE_BODY_SIZE`] to bound memory use.
pub async fn analyze_page_content(client: &reqwest::Client, url: &str) -> ContentAnalysis {
    match fetch_body(client, url).await {
        Ok(html) => analyze_html(&html),
        Err(e) => {
            log::debug!("Content fetch failed for {url}: {e}");
            ContentAnalysis {
                error: Some(e.to_string()),
                ..Default::default()
            }
        }
    }
}

async fn fetch_body(client: &reqwest::Client, url: &str) -> anyhow::Result<String> {
    let mut response = client.get(url).send().await?.error_for_status()?;

    let mut body: Vec<u8> = Vec::new();
    while let Some(chunk) = response.chunk().await? {
        let remaining = MAX_RESPONSE_BODY_SIZE.saturating_sub(body.len());
        if remaining == 0 {
            log::debug!("Truncating response body for {url} at {MAX_RESPONSE_BODY_SIZE} bytes");
            break;
        }
        body.extend_from_slice(&chunk[..chunk.len().min(remaining)]);
    }

    Ok(String::from_utf8_lossy(&body).into_owned())
}

/// Extracts links and password-bearing forms from an HTML document.
fn analyze_html(html: &str) -> ContentAnalysis {
    let document = Html::parse_document(html);

    let anchors: Vec<_> = document.select(&ANCHOR_SELECTOR).collect();
    let external_links: Vec<String> = anchors
        .iter()
        .filter_map(|a| a.value().attr("href"))
        .filter(|href| href.starts_with("http://") || href.starts_with("https://"))
        .map(|href| href.to_string())
        .collect();

    let forms: Vec<_> = document.select(&FORM_SELECTOR).collect();
    let suspicious_forms: Vec<SuspiciousForm> = forms
        .iter()
        .filter(|form| form.select(&PASSWORD_INPUT_SELECTOR).next().is_some())
        .map(|form| SuspiciousForm {
            action: form.value().attr("action").map(|s| s.to_string()),
            method: form.value().attr("method").map(|s| s.to_string()),
            has_password: true,
        })
        .collect();

    ContentAnalysis {
        total_links: anchors.len() as u32,
        forms_count: forms.len() as u32,
        external_links,
        suspicious_forms,
        error: None,
    }
}
