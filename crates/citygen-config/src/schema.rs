use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Closed vocabularies the generator may pick from.
///
/// Loaded once at startup and shared read-only by every request.
///
/// # Example
///
/// ```json
/// {
///   "terrain": ["desert", "urban", "forest"],
///   "lighting": ["day", "night", "sunset"],
///   "npc_behavior": ["crowded", "quiet town"],
///   "buildings": ["house", "market", "castle"]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    pub terrain: Vec<String>,
    pub lighting: Vec<String>,
    pub npc_behavior: Vec<String>,
    pub buildings: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Terrain,
    Lighting,
    NpcBehavior,
    Buildings,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Terrain,
        Category::Lighting,
        Category::NpcBehavior,
        Category::Buildings,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Category::Terrain => "terrain",
            Category::Lighting => "lighting",
            Category::NpcBehavior => "npc_behavior",
            Category::Buildings => "buildings",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VocabularyError {
    #[error("vocabulary category '{0}' has no values")]
    EmptyCategory(Category),

    #[error("vocabulary category '{category}' contains a blank value")]
    BlankValue { category: Category },
}

impl Vocabulary {
    pub fn values(&self, category: Category) -> &[String] {
        match category {
            Category::Terrain => &self.terrain,
            Category::Lighting => &self.lighting,
            Category::NpcBehavior => &self.npc_behavior,
            Category::Buildings => &self.buildings,
        }
    }

    /// Every category needs at least one non-blank value.
    pub fn validate(&self) -> Result<(), VocabularyError> {
        for category in Category::ALL {
            let values = self.values(category);
            if values.is_empty() {
                return Err(VocabularyError::EmptyCategory(category));
            }
            if values.iter().any(|v| v.trim().is_empty()) {
                return Err(VocabularyError::BlankValue { category });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vocabulary {
        Vocabulary {
            terrain: vec!["forest".into()],
            lighting: vec!["sunset".into()],
            npc_behavior: vec!["quiet town".into()],
            buildings: vec!["house".into(), "church".into()],
        }
    }

    #[test]
    fn test_validate_accepts_populated_vocabulary() {
        assert_eq!(sample().validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_empty_category() {
        let mut vocabulary = sample();
        vocabulary.buildings.clear();
        assert_eq!(
            vocabulary.validate(),
            Err(VocabularyError::EmptyCategory(Category::Buildings))
        );
    }

    #[test]
    fn test_validate_rejects_blank_value() {
        let mut vocabulary = sample();
        vocabulary.lighting.push("   ".into());
        let err = vocabulary.validate().unwrap_err();
        assert_eq!(err.to_string(), "vocabulary category 'lighting' contains a blank value");
    }

    #[test]
    fn test_values_by_category() {
        let vocabulary = sample();
        assert_eq!(vocabulary.values(Category::NpcBehavior), ["quiet town"]);
        assert_eq!(vocabulary.values(Category::Buildings).len(), 2);
    }
}
