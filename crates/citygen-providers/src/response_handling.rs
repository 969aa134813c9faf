//! Shared utilities for handling API responses

use serde::Deserialize;

/// Extract retry-after delay from response headers
/// Returns delay in milliseconds
pub fn extract_retry_after(headers: &reqwest::header::HeaderMap) -> Option<u64> {
    headers
        .get("retry-after")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.parse::<u64>().ok())
        .map(|secs| secs * 1000)
}

/// Summarise an API error body.
///
/// OpenAI-style bodies nest the details under `error`; anything that does not
/// match is returned verbatim.
pub fn summarize_error_body(text: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(text) {
        Ok(envelope) => envelope.error.to_string(),
        Err(_) => text.to_string(),
    }
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorResponse,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    #[serde(rename = "type")]
    error_type: Option<String>,
    message: Option<String>,
    code: Option<String>,
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut parts = Vec::new();

        if let Some(code) = &self.code {
            parts.push(format!("code: {}", code));
        }
        if let Some(error_type) = &self.error_type {
            parts.push(format!("type: {}", error_type));
        }
        if let Some(message) = &self.message {
            parts.push(format!("message: {}", message));
        }

        if parts.is_empty() {
            write!(f, "Unknown error")
        } else {
            write!(f, "{}", parts.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{HeaderMap, HeaderValue};

    #[test]
    fn test_extract_retry_after_present() {
        let mut headers = HeaderMap::new();
        headers.insert("retry-after", HeaderValue::from_static("60"));

        assert_eq!(extract_retry_after(&headers), Some(60000));
    }

    #[test]
    fn test_extract_retry_after_invalid() {
        let mut headers = HeaderMap::new();
        headers.insert("retry-after", HeaderValue::from_static("soon"));

        assert_eq!(extract_retry_after(&headers), None);
    }

    #[test]
    fn test_summarize_structured_body() {
        let body = r#"{"error":{"message":"Incorrect API key provided","type":"invalid_request_error","code":"invalid_api_key"}}"#;
        let summary = summarize_error_body(body);
        assert!(summary.contains("code: invalid_api_key"));
        assert!(summary.contains("type: invalid_request_error"));
        assert!(summary.contains("message: Incorrect API key provided"));
    }

    #[test]
    fn test_summarize_plain_body() {
        assert_eq!(summarize_error_body("upstream exploded"), "upstream exploded");
    }
}
