//! City scale classification.

use citygen_providers::{CompletionClient, ModelResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use tracing::{debug, warn};

use crate::prompts;
use crate::random::RandomSource;

/// Requested city scale. Drives how many buildings are selected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeClass {
    Small,
    #[default]
    Normal,
    Large,
}

impl SizeClass {
    /// Strict parse of a normalised reply.
    pub fn parse(reply: &str) -> Option<Self> {
        match reply.trim().to_lowercase().as_str() {
            "small" => Some(Self::Small),
            "normal" => Some(Self::Normal),
            "large" => Some(Self::Large),
            _ => None,
        }
    }

    /// Anything other than the three literals falls back to `Normal`.
    pub fn parse_or_default(reply: &str) -> Self {
        Self::parse(reply).unwrap_or_default()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Normal => "normal",
            Self::Large => "large",
        }
    }

    /// Inclusive range of buildings for this scale.
    pub fn building_range(self) -> RangeInclusive<usize> {
        match self {
            Self::Small => 1..=3,
            Self::Normal => 4..=7,
            Self::Large => 8..=12,
        }
    }

    pub fn building_count(self, random: &dyn RandomSource) -> usize {
        random.pick_count(self.building_range())
    }
}

impl fmt::Display for SizeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ask the model for the city scale. Malformed replies are masked as `Normal`.
pub async fn classify_size(
    client: &dyn CompletionClient,
    prompt: &str,
    max_tokens: usize,
) -> ModelResult<SizeClass> {
    let reply = client
        .complete(
            prompts::SIZE_SYSTEM,
            &prompts::size_instruction(prompt),
            max_tokens,
        )
        .await?;
    debug!(reply = %reply, "size classifier reply");

    Ok(SizeClass::parse(&reply).unwrap_or_else(|| {
        warn!(reply = %reply, "unrecognised city size, defaulting to normal");
        SizeClass::Normal
    }))
}
