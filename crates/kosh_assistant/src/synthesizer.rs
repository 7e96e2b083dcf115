//! Query synthesis stage.

use crate::candidate::CandidateQuery;
use crate::prompt::synthesis_prompt;
use kosh_core::{GenerateRequest, Message, Role};
use kosh_error::KoshResult;
use kosh_interface::KoshDriver;
use tracing::{debug, instrument};

/// Turns a natural-language question into a candidate SQL statement.
///
/// The synthesizer fills the fixed few-shot prompt with the live schema
/// text and invokes the model with deterministic (zero-temperature)
/// decoding. It does not retry: driver errors propagate to the
/// orchestrator, which degrades them into a composed apology.
#[derive(Debug, Clone)]
pub struct QuerySynthesizer<D: KoshDriver> {
    driver: D,
    top_k: u32,
}

impl<D: KoshDriver> QuerySynthesizer<D> {
    /// Create a new synthesizer with the given model driver and row limit.
    pub fn new(driver: D, top_k: u32) -> Self {
        Self { driver, top_k }
    }

    /// Generate a candidate query for the question against the schema.
    #[instrument(skip(self, question, schema_text), fields(model = %self.driver.model_name()))]
    pub async fn synthesize(
        &self,
        question: &str,
        schema_text: &str,
    ) -> KoshResult<CandidateQuery> {
        let prompt = synthesis_prompt(question, self.top_k, schema_text);

        let request = GenerateRequest {
            messages: vec![Message::new(Role::User, prompt)],
            temperature: Some(0.0),
            ..Default::default()
        };

        let response = self.driver.generate(&request).await?;
        let candidate = CandidateQuery::new(response.text());

        debug!(candidate = %candidate, "Generated candidate query");
        Ok(candidate)
    }
}
