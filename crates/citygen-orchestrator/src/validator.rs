//! Domain gate: is the prompt asking for a city at all?

use citygen_providers::{CompletionClient, ModelResult};
use tracing::debug;

use crate::prompts;

/// Only an exact (case/whitespace-insensitive) "yes" passes. Anything else,
/// including an empty or chatty reply, is a rejection.
pub async fn is_city_prompt(
    client: &dyn CompletionClient,
    prompt: &str,
    max_tokens: usize,
) -> ModelResult<bool> {
    let reply = client
        .complete(
            prompts::VALIDATION_SYSTEM,
            &prompts::validation_instruction(prompt),
            max_tokens,
        )
        .await?;
    debug!(reply = %reply, "validator reply");

    Ok(accepts(&reply))
}

fn accepts(reply: &str) -> bool {
    reply.trim().to_lowercase() == "yes"
}

#[cfg(test)]
mod tests {
    use super::*;
    use citygen_providers::testing::ScriptedCompletionClient;

    #[test]
    fn test_accepts_only_yes() {
        assert!(accepts("yes"));
        assert!(accepts("  YES\n"));
        assert!(accepts("Yes"));

        for reply in ["no", "", "yes.", "Yes, it does", "y", "maybe", "no yes"] {
            assert!(!accepts(reply), "reply {reply:?} must be rejected");
        }
    }

    #[tokio::test]
    async fn test_is_city_prompt() {
        let cases = [
            ("Generate a cyberpunk city", "yes", true),
            ("Tell me a joke", "no", false),
            ("Create a fantasy kingdom", "Yes", true),
            ("What is the weather today?", "No.", false),
        ];

        for (prompt, reply, expected) in cases {
            let client = ScriptedCompletionClient::new([reply]);
            assert_eq!(is_city_prompt(&client, prompt, 10).await.unwrap(), expected);

            let call = &client.calls()[0];
            assert_eq!(call.system, prompts::VALIDATION_SYSTEM);
            assert_eq!(call.max_tokens, 10);
        }
    }
}
