use serde::{Deserialize, Serialize};

pub const EMPTY_PROMPT_MESSAGE: &str = "Prompt cannot be empty or only whitespace.";
pub const UPSTREAM_FAILURE_MESSAGE: &str = "Upstream completion service failed.";

/// Body of `POST /generate`.
///
/// `prompt` is optional here so that a missing or `null` prompt is reported
/// with the same message as an empty one.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub prompt: Option<String>,
}

impl GenerateRequest {
    /// The prompt with surrounding whitespace removed, if anything is left.
    pub fn trimmed_prompt(&self) -> Option<&str> {
        self.prompt
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(json: &str) -> GenerateRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_trimmed_prompt() {
        assert_eq!(
            request(r#"{"prompt": "  Generate a harbor town \n"}"#).trimmed_prompt(),
            Some("Generate a harbor town")
        );
    }

    #[test]
    fn test_blank_prompts_are_none() {
        for body in [r#"{"prompt": ""}"#, r#"{"prompt": "   "}"#, r#"{"prompt": null}"#, "{}"] {
            assert_eq!(request(body).trimmed_prompt(), None, "body {body}");
        }
    }
}
