//! Configuration from environment variables.
//!
//! **Environment variables:**
//! - `OPENAI_API_KEY`: completion service key (required)
//! - `FRONTEND_URL`: the single origin allowed by CORS (default: http://localhost:3000)
//! - `HOST`: bind address (default: 0.0.0.0)
//! - `PORT`: server port (default: 8000)
//! - `CITYGEN_VOCABULARY`: vocabulary document path (default: first of `config.json`,
//!   `vocabulary.json`, ... in the working directory)
//! - `OPENAI_MODEL`: model name (default: gpt-4o)
//! - `OPENAI_BASE_URL`: OpenAI-compatible endpoint (default: https://api.openai.com)
//! - `OPENAI_TIMEOUT_SECS`: upstream request timeout (default: none)

use anyhow::{anyhow, Result};
use citygen_providers::ProviderConfig;
use std::env;
use std::path::PathBuf;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_FRONTEND_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub frontend_url: String,
    pub vocabulary_path: Option<PathBuf>,
    pub provider: ProviderConfig,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = var("OPENAI_API_KEY")
            .ok_or_else(|| anyhow!("Missing OPENAI_API_KEY in environment or .env.local"))?;

        let mut provider = ProviderConfig::openai(api_key);
        if let Some(model) = var("OPENAI_MODEL") {
            provider = provider.with_model(model);
        }
        if let Some(url) = var("OPENAI_BASE_URL") {
            provider = provider.with_base_url(url);
        }
        if let Some(secs) = var("OPENAI_TIMEOUT_SECS").and_then(|s| s.parse().ok()) {
            provider = provider.with_timeout(secs);
        }

        Ok(Self {
            host: var("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: var("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            frontend_url: var("FRONTEND_URL").unwrap_or_else(|| DEFAULT_FRONTEND_URL.to_string()),
            vocabulary_path: var("CITYGEN_VOCABULARY").map(PathBuf::from),
            provider,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
