//! OpenAI chat-completions client

use async_trait::async_trait;
use reqwest::Client;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use crate::response_handling::{extract_retry_after, summarize_error_body};
use crate::{CompletionClient, ModelResult, ProviderConfig, ProviderError};

const DEFAULT_RETRY_AFTER_MS: u64 = 60_000;

/// OpenAI API client
pub struct OpenAIClient {
    client: Client,
    config: ProviderConfig,
}

impl OpenAIClient {
    pub fn new(config: ProviderConfig) -> Result<Self, ProviderError> {
        let api_key = config
            .api_key
            .as_ref()
            .ok_or_else(|| ProviderError::Configuration("API key required for OpenAI".into()))?;

        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::AUTHORIZATION,
            format!("Bearer {}", api_key.expose_secret())
                .parse()
                .map_err(|_| ProviderError::Configuration("Invalid API key format".into()))?,
        );
        headers.insert(
            reqwest::header::CONTENT_TYPE,
            reqwest::header::HeaderValue::from_static("application/json"),
        );

        let mut builder = Client::builder().default_headers(headers);
        if let Some(secs) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            config,
        })
    }

    fn build_request(&self, system: &str, user: &str, max_tokens: usize) -> OpenAIRequest {
        OpenAIRequest {
            model: self.config.model.clone(),
            messages: vec![
                OpenAIMessage {
                    role: "system".to_string(),
                    content: system.to_string(),
                },
                OpenAIMessage {
                    role: "user".to_string(),
                    content: user.to_string(),
                },
            ],
            max_tokens,
            temperature: self.config.temperature,
        }
    }

    fn classify_status(
        &self,
        status: reqwest::StatusCode,
        retry_after_ms: Option<u64>,
        body: &str,
    ) -> ProviderError {
        match status.as_u16() {
            401 | 403 => ProviderError::AuthenticationFailed(summarize_error_body(body)),
            404 => ProviderError::ModelNotFound {
                model: self.config.model.clone(),
            },
            429 => ProviderError::RateLimited {
                retry_after_ms: retry_after_ms.unwrap_or(DEFAULT_RETRY_AFTER_MS),
            },
            _ => ProviderError::InvalidResponse(format!(
                "API error {}: {}",
                status,
                summarize_error_body(body)
            )),
        }
    }
}

#[async_trait]
impl CompletionClient for OpenAIClient {
    async fn complete(&self, system: &str, user: &str, max_tokens: usize) -> ModelResult<String> {
        let request = self.build_request(system, user, max_tokens);
        let url = format!("{}/v1/chat/completions", self.config.base_url_trimmed());

        debug!(model = %self.config.model, max_tokens, "sending completion request");
        let response = self.client.post(&url).json(&request).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let retry_after_ms = extract_retry_after(response.headers());
            let body = response.text().await.unwrap_or_default();
            return Err(self.classify_status(status, retry_after_ms, &body));
        }

        let api_response: OpenAIResponse = response.json().await?;
        let choice = api_response.choices.into_iter().next().ok_or_else(|| {
            ProviderError::InvalidResponse("completion returned no choices".into())
        })?;

        Ok(choice.message.content.unwrap_or_default())
    }

    fn model(&self) -> &str {
        &self.config.model
    }

    fn provider(&self) -> &str {
        "openai"
    }
}

// API request/response types
#[derive(Debug, Serialize)]
struct OpenAIRequest {
    model: String,
    messages: Vec<OpenAIMessage>,
    max_tokens: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Serialize)]
struct OpenAIMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct OpenAIResponse {
    #[serde(default)]
    choices: Vec<OpenAIChoice>,
}

#[derive(Debug, Deserialize)]
struct OpenAIChoice {
    message: OpenAIResponseMessage,
}

#[derive(Debug, Default, Deserialize)]
struct OpenAIResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_requires_api_key() {
        let result = OpenAIClient::new(ProviderConfig::default());
        assert!(matches!(result, Err(ProviderError::Configuration(_))));
    }

    #[test]
    fn test_build_request_shape() {
        let client = OpenAIClient::new(ProviderConfig::openai("sk-test")).unwrap();
        let request = client.build_request("be terse", "hello", 10);
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["model"], "gpt-4o");
        assert_eq!(value["max_tokens"], 10);
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][0]["content"], "be terse");
        assert_eq!(value["messages"][1]["role"], "user");
        assert_eq!(value["messages"][1]["content"], "hello");
        assert!(value.get("temperature").is_none());
    }

    #[test]
    fn test_classify_status() {
        let client = OpenAIClient::new(ProviderConfig::openai("sk-test")).unwrap();

        let err = client.classify_status(reqwest::StatusCode::UNAUTHORIZED, None, "nope");
        assert!(matches!(err, ProviderError::AuthenticationFailed(_)));

        let err = client.classify_status(reqwest::StatusCode::TOO_MANY_REQUESTS, None, "");
        assert_eq!(err.retry_after_ms(), Some(DEFAULT_RETRY_AFTER_MS));

        let err = client.classify_status(reqwest::StatusCode::TOO_MANY_REQUESTS, Some(2000), "");
        assert_eq!(err.retry_after_ms(), Some(2000));

        let err = client.classify_status(reqwest::StatusCode::NOT_FOUND, None, "");
        assert!(matches!(err, ProviderError::ModelNotFound { model } if model == "gpt-4o"));

        let err = client.classify_status(reqwest::StatusCode::INTERNAL_SERVER_ERROR, None, "oops");
        assert!(err.to_string().contains("500"));
    }
}
