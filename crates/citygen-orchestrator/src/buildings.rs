//! Building selection with a random fallback.

use citygen_config::Vocabulary;
use citygen_providers::{CompletionClient, ModelResult};
use tracing::{debug, warn};

use crate::prompts;
use crate::random::RandomSource;
use crate::sanitize::sanitize_reply;

/// Ask the model for `count` buildings relevant to the prompt.
///
/// Never fails on a malformed reply: if the reply is not a JSON array of
/// strings, `count` distinct buildings are sampled from the vocabulary
/// instead. Only transport failures are returned as errors.
pub async fn select_buildings(
    client: &dyn CompletionClient,
    prompt: &str,
    vocabulary: &Vocabulary,
    count: usize,
    random: &dyn RandomSource,
    max_tokens: usize,
) -> ModelResult<Vec<String>> {
    let reply = client
        .complete(
            prompts::BUILDINGS_SYSTEM,
            &prompts::buildings_instruction(prompt, vocabulary, count),
            max_tokens,
        )
        .await?;
    debug!(reply = %reply, "building selector reply");

    match serde_json::from_str::<Vec<String>>(&sanitize_reply(&reply)) {
        Ok(buildings) => {
            if buildings.len() != count {
                debug!(requested = count, returned = buildings.len(), "model returned a different building count");
            }
            Ok(buildings)
        }
        Err(e) => {
            warn!(error = %e, count, "unparseable building list, sampling from vocabulary");
            if count > vocabulary.buildings.len() {
                warn!(
                    count,
                    available = vocabulary.buildings.len(),
                    "vocabulary has fewer buildings than requested"
                );
            }
            Ok(random.sample(&vocabulary.buildings, count))
        }
    }
}
