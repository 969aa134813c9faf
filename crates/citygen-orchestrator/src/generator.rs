//! The city generation pipeline.
//!
//! ```text
//! Start -> Validating -> Rejected
//!                     -> SizeClassifying -> AttributeClassifying -> AttributeError
//!                                                                -> BuildingSelecting -> Done
//! ```
//!
//! Stages run strictly in order; each one needs the previous stage's result.
//! `Rejected` and `AttributeError` end the run with a [`CityOutcome::Failed`],
//! every other anomaly from the model is masked locally.

use std::sync::Arc;

use citygen_config::Vocabulary;
use citygen_providers::{CompletionClient, ProviderError};
use tracing::{info, warn};

use crate::attributes::classify_attributes;
use crate::buildings::select_buildings;
use crate::error::StageError;
use crate::prompts::TokenBudgets;
use crate::random::{RandomSource, ThreadRandom};
use crate::size::{classify_size, SizeClass};
use crate::types::{CityAttributes, CityOutcome, CitySpec};
use crate::validator::is_city_prompt;

/// Stateless per request; cheap to share behind an `Arc`.
pub struct CityGenerator {
    client: Arc<dyn CompletionClient>,
    vocabulary: Arc<Vocabulary>,
    random: Arc<dyn RandomSource>,
    budgets: TokenBudgets,
}

impl CityGenerator {
    pub fn new(client: Arc<dyn CompletionClient>, vocabulary: Arc<Vocabulary>) -> Self {
        Self {
            client,
            vocabulary,
            random: Arc::new(ThreadRandom),
            budgets: TokenBudgets::default(),
        }
    }

    pub fn with_random(mut self, random: Arc<dyn RandomSource>) -> Self {
        self.random = random;
        self
    }

    pub fn with_budgets(mut self, budgets: TokenBudgets) -> Self {
        self.budgets = budgets;
        self
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub async fn is_city_prompt(&self, prompt: &str) -> Result<bool, ProviderError> {
        is_city_prompt(self.client.as_ref(), prompt, self.budgets.validation).await
    }

    pub async fn classify_size(&self, prompt: &str) -> Result<SizeClass, ProviderError> {
        classify_size(self.client.as_ref(), prompt, self.budgets.size).await
    }

    pub fn building_count(&self, size: SizeClass) -> usize {
        size.building_count(self.random.as_ref())
    }

    pub async fn classify_attributes(&self, prompt: &str) -> Result<CityAttributes, StageError> {
        classify_attributes(
            self.client.as_ref(),
            prompt,
            &self.vocabulary,
            self.budgets.attributes,
        )
        .await
    }

    pub async fn select_buildings(
        &self,
        prompt: &str,
        count: usize,
    ) -> Result<Vec<String>, ProviderError> {
        select_buildings(
            self.client.as_ref(),
            prompt,
            &self.vocabulary,
            count,
            self.random.as_ref(),
            self.budgets.buildings,
        )
        .await
    }

    /// Run the whole pipeline for an already-trimmed, non-empty prompt.
    ///
    /// Domain failures come back as `Ok(CityOutcome::Failed)`. Only a
    /// failure to reach the completion service is an `Err`.
    pub async fn generate(&self, prompt: &str) -> Result<CityOutcome, ProviderError> {
        if !self.is_city_prompt(prompt).await? {
            info!("prompt rejected as unrelated to city generation");
            return Ok(CityOutcome::rejected());
        }

        let size = self.classify_size(prompt).await?;
        let count = self.building_count(size);
        info!(%size, count, "city size classified");

        let attributes = match self.classify_attributes(prompt).await {
            Ok(attributes) => attributes,
            Err(StageError::MalformedReply(e)) => {
                warn!(error = %e, "attribute classification reply was not valid JSON");
                return Ok(CityOutcome::classification_failed());
            }
            Err(StageError::Provider(e)) => return Err(e),
        };

        let buildings = self.select_buildings(prompt, count).await?;
        info!(
            terrain = %attributes.terrain,
            lighting = %attributes.lighting,
            npc_behavior = %attributes.npc_behavior,
            buildings = buildings.len(),
            "city generated"
        );

        Ok(CityOutcome::Generated(CitySpec {
            attributes,
            buildings,
        }))
    }
}
