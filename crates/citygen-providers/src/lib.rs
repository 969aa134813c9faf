//! Citygen Providers - text-completion clients
//!
//! The city generation pipeline only needs one capability from a model:
//! "given a system instruction, a user instruction and an output budget,
//! return the first generated message's text". This crate defines that seam
//! ([`CompletionClient`]) and ships an OpenAI-compatible implementation.

mod config;
mod error;
mod openai;
mod response_handling;
pub mod testing;
mod traits;

pub use config::ProviderConfig;
pub use error::ProviderError;
pub use openai::OpenAIClient;
pub use secrecy::SecretString;
pub use traits::{CompletionClient, ModelResult};
