//! Request and response shapes for the HTTP API.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/check-url`.
#[derive(Debug, Deserialize)]
pub struct CheckUrlRequest {
    /// The URL to scan.
    pub url: String,
    /// Whether to additionally fetch and analyze the page content.
    #[serde(default)]
    pub scan_content: bool,
}

/// Body of `POST /api/check-urls-batch`.
#[derive(Debug, Deserialize)]
pub struct BatchCheckRequest {
    /// URLs to scan independently.
    pub urls: Vec<String>,
}

/// Error payload for rejected requests and failed batch entries.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable failure description.
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_url_request_scan_content_defaults_false() {
        let request: CheckUrlRequest =
            serde_json::from_str(r#"{"url": "https://example.com"}"#).unwrap();
        assert_eq!(request.url, "https://example.com");
        assert!(!request.scan_content);
    }

    #[test]
    fn test_check_url_request_with_scan_content() {
        let request: CheckUrlRequest =
            serde_json::from_str(r#"{"url": "example.com", "scan_content": true}"#).unwrap();
        assert!(request.scan_content);
    }

    #[test]
    fn test_batch_request_deserialization() {
        let request: BatchCheckRequest =
            serde_json::from_str(r#"{"urls": ["https://a.example", "https://b.example"]}"#)
                .unwrap();
        assert_eq!(request.urls.len(), 2);
    }
}
