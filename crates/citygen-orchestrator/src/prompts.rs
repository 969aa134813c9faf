//! Instructions sent to the completion service, one pair per stage.

use citygen_config::{Category, Vocabulary};

pub const VALIDATION_SYSTEM: &str =
    "You are an AI that determines if a prompt is about city generation.";
pub const SIZE_SYSTEM: &str = "You classify city descriptions into size categories.";
pub const ATTRIBUTES_SYSTEM: &str = "You classify city descriptions into predefined categories.";
pub const BUILDINGS_SYSTEM: &str =
    "You extract the most relevant buildings from a list based on a city description.";

/// Maximum output tokens per stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenBudgets {
    pub validation: usize,
    pub size: usize,
    pub attributes: usize,
    pub buildings: usize,
}

impl Default for TokenBudgets {
    fn default() -> Self {
        Self {
            validation: 10,
            size: 10,
            attributes: 50,
            buildings: 100,
        }
    }
}

pub fn validation_instruction(prompt: &str) -> String {
    format!(
        "Does the following prompt request to generate a city?\n\
         Prompt: '{prompt}'\n\
         Answer with 'yes' or 'no' only."
    )
}

pub fn size_instruction(prompt: &str) -> String {
    format!(
        r#"Analyze the following city generation prompt and determine the city size:

Prompt: "{prompt}"

Choose one of the following:
- "small" (few buildings, quiet town)
- "normal" (moderate buildings, balanced city)
- "large" (many buildings, dense metropolis)

Provide only the answer (small, normal, or large) with no additional text.
If the prompt gives no information about the city size, answer "normal"."#
    )
}

pub fn attributes_instruction(prompt: &str, vocabulary: &Vocabulary) -> String {
    format!(
        r#"Analyze the following city generation prompt and categorize it based on the available options:

Prompt: "{prompt}"

Choose the most relevant category for each field from the given options:

Terrain: {terrain}
Lighting: {lighting}
NPC Behavior: {npc_behavior}

Answer in JSON format:
{{
    "terrain": "<one of the terrain types>",
    "lighting": "<one of the lighting types>",
    "npc_behavior": "<one of the NPC behaviors>"
}}"#,
        terrain = option_list(vocabulary, Category::Terrain),
        lighting = option_list(vocabulary, Category::Lighting),
        npc_behavior = option_list(vocabulary, Category::NpcBehavior),
    )
}

pub fn buildings_instruction(prompt: &str, vocabulary: &Vocabulary, count: usize) -> String {
    format!(
        r#"Based on the city description "{prompt}", select the most relevant {count} buildings from this list:

Buildings: {buildings}

Answer in JSON format as an array:
["<building1>", "<building2>", "<building3>", ...]"#,
        buildings = option_list(vocabulary, Category::Buildings),
    )
}

fn option_list(vocabulary: &Vocabulary, category: Category) -> String {
    serde_json::to_string(vocabulary.values(category)).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocabulary() -> Vocabulary {
        Vocabulary {
            terrain: vec!["forest".into(), "desert".into()],
            lighting: vec!["sunset".into()],
            npc_behavior: vec!["quiet town".into()],
            buildings: vec!["house".into(), "church".into(), "market".into()],
        }
    }

    #[test]
    fn test_validation_instruction_embeds_prompt() {
        let text = validation_instruction("Tell me a joke");
        assert!(text.contains("Prompt: 'Tell me a joke'"));
        assert!(text.contains("'yes' or 'no'"));
    }

    #[test]
    fn test_attributes_instruction_lists_vocabularies() {
        let text = attributes_instruction("a quiet forest hamlet", &vocabulary());
        assert!(text.contains(r#"Terrain: ["forest","desert"]"#));
        assert!(text.contains(r#"Lighting: ["sunset"]"#));
        assert!(text.contains(r#"NPC Behavior: ["quiet town"]"#));
        assert!(text.contains(r#""npc_behavior": "<one of the NPC behaviors>""#));
        assert!(!text.contains("house"));
    }

    #[test]
    fn test_buildings_instruction_asks_for_count() {
        let text = buildings_instruction("a village", &vocabulary(), 2);
        assert!(text.contains("select the most relevant 2 buildings"));
        assert!(text.contains(r#"Buildings: ["house","church","market"]"#));
    }

    #[test]
    fn test_default_budgets() {
        let budgets = TokenBudgets::default();
        assert_eq!(
            (budgets.validation, budgets.size, budgets.attributes, budgets.buildings),
            (10, 10, 50, 100)
        );
    }
}
