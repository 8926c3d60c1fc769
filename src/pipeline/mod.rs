mod extract;
mod prompt;
mod types;
mod validate;

pub use types::*;

use crate::{Error, Result, llm::LlmClient};
use std::sync::Arc;
use tracing::{debug, warn};

/// The structured-generation pipeline: prompt construction, one model call,
/// bracket extraction, JSON parsing, and shape validation, in that order.
/// Stateless per call; nothing is cached or retried, so a quiz retake always
/// reaches the model again.
pub struct Pipeline {
    client: Arc<dyn LlmClient>,
}

impl Pipeline {
    pub fn new(client: Arc<dyn LlmClient>) -> Self {
        Self { client }
    }

    /// Runs one generation end to end and returns the validated result.
    ///
    /// Preconditions (caller-enforced): schedule requests should carry at
    /// least one fixed event, and quiz topics must be non-empty. Violating
    /// either does not break the pipeline, but the model output becomes
    /// meaningless.
    pub async fn generate(&self, request: GenerationRequest) -> Result<GenerationResult> {
        match request {
            GenerationRequest::Schedule { fixed_events } => self
                .generate_schedule(&fixed_events)
                .await
                .map(GenerationResult::Schedule),
            GenerationRequest::Quiz { topic, is_retake } => self
                .generate_quiz(&topic, is_retake)
                .await
                .map(GenerationResult::Quiz),
        }
    }

    pub async fn generate_schedule(&self, fixed_events: &[FixedEvent]) -> Result<Vec<DemoSlot>> {
        debug!("Generating schedule around {} fixed events", fixed_events.len());
        let user_prompt = prompt::schedule_prompt(fixed_events);
        let parsed = self.complete_and_parse(&user_prompt).await?;
        validate::validate_schedule(&parsed)
    }

    pub async fn generate_quiz(&self, topic: &str, is_retake: bool) -> Result<Vec<Question>> {
        debug!(topic, is_retake, "Generating quiz");
        let user_prompt = prompt::quiz_prompt(topic, is_retake);
        let parsed = self.complete_and_parse(&user_prompt).await?;
        validate::validate_quiz(&parsed)
    }

    async fn complete_and_parse(&self, user_prompt: &str) -> Result<serde_json::Value> {
        let reply = self
            .client
            .complete(prompt::SYSTEM_PROMPT, user_prompt)
            .await?;

        let candidate = extract::extract_json(&reply).ok_or_else(|| {
            warn!("Model reply contained no JSON payload");
            Error::Extraction
        })?;

        serde_json::from_str(candidate)
            .map_err(|e| Error::parse(e.to_string(), candidate.to_string()))
    }
}
