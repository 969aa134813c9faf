use serde::{Deserialize, Serialize};

pub const REJECTION_MESSAGE: &str =
    "Your prompt does not seem related to generating a city. Please provide a relevant prompt.";
pub const CLASSIFICATION_FAILED_MESSAGE: &str =
    "Failed to classify prompt into predefined categories.";

/// One pick per attribute category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityAttributes {
    pub terrain: String,
    pub lighting: String,
    pub npc_behavior: String,
}

/// Structured description of a generated city.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitySpec {
    #[serde(flatten)]
    pub attributes: CityAttributes,
    pub buildings: Vec<String>,
}

/// Result of one pipeline run as seen by the caller.
///
/// Serialised untagged: either the bare [`CitySpec`] object or
/// `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CityOutcome {
    Generated(CitySpec),
    Failed { error: String },
}

impl CityOutcome {
    pub fn rejected() -> Self {
        Self::Failed {
            error: REJECTION_MESSAGE.to_string(),
        }
    }

    pub fn classification_failed() -> Self {
        Self::Failed {
            error: CLASSIFICATION_FAILED_MESSAGE.to_string(),
        }
    }

    pub fn is_generated(&self) -> bool {
        matches!(self, Self::Generated(_))
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed { error } => Some(error),
            Self::Generated(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_generated_serialises_flat() {
        let outcome = CityOutcome::Generated(CitySpec {
            attributes: CityAttributes {
                terrain: "forest".into(),
                lighting: "sunset".into(),
                npc_behavior: "quiet town".into(),
            },
            buildings: vec!["house".into(), "church".into()],
        });

        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            json!({
                "terrain": "forest",
                "lighting": "sunset",
                "npc_behavior": "quiet town",
                "buildings": ["house", "church"]
            })
        );
    }

    #[test]
    fn test_failed_serialises_as_error_object() {
        assert_eq!(
            serde_json::to_value(CityOutcome::classification_failed()).unwrap(),
            json!({ "error": "Failed to classify prompt into predefined categories." })
        );
    }

    #[test]
    fn test_deserialise_either_shape() {
        let failed: CityOutcome = serde_json::from_str(r#"{"error":"nope"}"#).unwrap();
        assert_eq!(failed.error(), Some("nope"));

        let generated: CityOutcome = serde_json::from_str(
            r#"{"terrain":"urban","lighting":"night","npc_behavior":"crowded","buildings":[]}"#,
        )
        .unwrap();
        assert!(generated.is_generated());
    }
}
