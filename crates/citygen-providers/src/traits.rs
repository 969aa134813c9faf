//! Completion client traits

use async_trait::async_trait;

use crate::ProviderError;

/// Result type for model operations
pub type ModelResult<T> = Result<T, ProviderError>;

/// A text-completion capability.
///
/// Implementations must be safe for concurrent use; every inbound request
/// shares the same client without locking.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send one system + user instruction pair and return the text of the
    /// first generated message.
    async fn complete(&self, system: &str, user: &str, max_tokens: usize) -> ModelResult<String>;

    /// Get the model identifier
    fn model(&self) -> &str;

    /// Get the provider name
    fn provider(&self) -> &str;
}
