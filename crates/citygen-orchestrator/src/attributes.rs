//! Terrain / lighting / NPC behaviour classification.

use citygen_config::{Category, Vocabulary};
use citygen_providers::CompletionClient;
use tracing::{debug, warn};

use crate::error::StageError;
use crate::prompts;
use crate::sanitize::sanitize_reply;
use crate::types::CityAttributes;

/// Ask the model for one value per attribute category.
///
/// A reply that does not decode to the expected object is a
/// [`StageError::MalformedReply`]. Values are not forced into the
/// vocabulary; out-of-vocabulary picks are only logged.
pub async fn classify_attributes(
    client: &dyn CompletionClient,
    prompt: &str,
    vocabulary: &Vocabulary,
    max_tokens: usize,
) -> Result<CityAttributes, StageError> {
    let reply = client
        .complete(
            prompts::ATTRIBUTES_SYSTEM,
            &prompts::attributes_instruction(prompt, vocabulary),
            max_tokens,
        )
        .await?;
    debug!(reply = %reply, "attribute classifier reply");

    let attributes: CityAttributes = serde_json::from_str(&sanitize_reply(&reply))?;

    for (category, value) in [
        (Category::Terrain, &attributes.terrain),
        (Category::Lighting, &attributes.lighting),
        (Category::NpcBehavior, &attributes.npc_behavior),
    ] {
        if !vocabulary.values(category).contains(value) {
            warn!(%category, value = %value, "model picked a value outside the vocabulary");
        }
    }

    Ok(attributes)
}
