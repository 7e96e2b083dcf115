//! Answer composition stage.

use crate::outcome::ExecutionOutcome;
use crate::prompt::composition_prompt;
use crate::sentinel::COMPOSER_APOLOGY;
use kosh_core::{GenerateRequest, Message, Role};
use kosh_interface::KoshDriver;
use tracing::{debug, instrument, warn};

/// Turns an execution outcome back into a plain-language answer.
///
/// This is the last stage before the caller, so it is the one stage that
/// swallows its own failures: if composition errors, the fixed apology is
/// returned instead.
#[derive(Debug, Clone)]
pub struct ResponseComposer<D: KoshDriver> {
    driver: D,
}

impl<D: KoshDriver> ResponseComposer<D> {
    /// Create a new composer with the given model driver.
    pub fn new(driver: D) -> Self {
        Self { driver }
    }

    /// Compose the final answer for the question and outcome.
    #[instrument(skip(self, question, outcome), fields(model = %self.driver.model_name()))]
    pub async fn compose(&self, question: &str, outcome: &ExecutionOutcome) -> String {
        let results_text = outcome.results_text();
        debug!(results_len = results_text.len(), "Composing answer");

        let prompt = composition_prompt(question, &results_text);
        let request = GenerateRequest {
            messages: vec![Message::new(Role::User, prompt)],
            temperature: Some(0.0),
            ..Default::default()
        };

        match self.driver.generate(&request).await {
            Ok(response) => response.text().trim().to_string(),
            Err(err) => {
                warn!(error = %err, "Answer composition failed");
                COMPOSER_APOLOGY.to_string()
            }
        }
    }
}
