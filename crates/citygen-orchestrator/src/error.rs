use citygen_providers::ProviderError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StageError {
    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("malformed model reply: {0}")]
    MalformedReply(#[from] serde_json::Error),
}
