//! Citygen Orchestrator - prompt-orchestration pipeline
//!
//! Turns a free-text prompt into a structured city description by running
//! four completion calls in sequence:
//!
//! 1. validation (is this a city request at all?)
//! 2. size classification (small / normal / large, drives building count)
//! 3. attribute classification (terrain, lighting, NPC behaviour)
//! 4. building selection
//!
//! See [`CityGenerator::generate`] for the failure policy.

mod attributes;
mod buildings;
mod error;
mod generator;
pub mod prompts;
pub mod random;
mod sanitize;
mod size;
mod types;
mod validator;

pub use attributes::classify_attributes;
pub use buildings::select_buildings;
pub use error::StageError;
pub use generator::CityGenerator;
pub use prompts::TokenBudgets;
pub use random::{RandomSource, SeededRandom, ThreadRandom};
pub use sanitize::sanitize_reply;
pub use size::{classify_size, SizeClass};
pub use types::{
    CityAttributes, CityOutcome, CitySpec, CLASSIFICATION_FAILED_MESSAGE, REJECTION_MESSAGE,
};
pub use validator::is_city_prompt;
