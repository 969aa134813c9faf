//! Provider error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("rate limit exceeded: retry after {retry_after_ms}ms")]
    RateLimited { retry_after_ms: u64 },

    #[error("model not found: {model}")]
    ModelNotFound { model: String },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("configuration error: {0}")]
    Configuration(String),
}

impl ProviderError {
    pub fn retry_after_ms(&self) -> Option<u64> {
        match self {
            Self::RateLimited { retry_after_ms } => Some(*retry_after_ms),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retry_after_only_for_rate_limit() {
        let limited = ProviderError::RateLimited {
            retry_after_ms: 1500,
        };
        assert_eq!(limited.retry_after_ms(), Some(1500));
        assert_eq!(
            ProviderError::InvalidResponse("boom".into()).retry_after_ms(),
            None
        );
    }

    #[test]
    fn test_display_messages() {
        let err = ProviderError::ModelNotFound {
            model: "gpt-0".to_string(),
        };
        assert_eq!(err.to_string(), "model not found: gpt-0");

        let err = ProviderError::Configuration("API key required".into());
        assert_eq!(err.to_string(), "configuration error: API key required");
    }
}
