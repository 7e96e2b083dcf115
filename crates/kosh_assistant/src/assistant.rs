//! Pipeline orchestration.

use crate::candidate::CandidateQuery;
use crate::composer::ResponseComposer;
use crate::config::AssistantConfig;
use crate::executor::QueryExecutor;
use crate::outcome::ExecutionOutcome;
use crate::synthesizer::QuerySynthesizer;
use kosh_interface::{KoshDriver, QueryBackend};
use tracing::{debug, info, instrument, warn};

/// The question-answering pipeline: synthesizer → executor → composer.
///
/// The orchestrator is the availability boundary of the system. Every
/// failure along the way degrades into an [`ExecutionOutcome`] that the
/// composer can explain, so [`Assistant::answer`] always returns a string
/// and never an error.
///
/// The assistant is stateless across calls and safe to share between
/// concurrent requests; each invocation reflects the schema and opens its
/// own database connection through the backend.
pub struct Assistant<D: KoshDriver, B: QueryBackend> {
    synthesizer: QuerySynthesizer<D>,
    executor: QueryExecutor<B>,
    composer: ResponseComposer<D>,
    refusal_prefixes: Vec<String>,
}

impl<D, B> Assistant<D, B>
where
    D: KoshDriver + Clone,
    B: QueryBackend,
{
    /// Create a new assistant from a model driver, a query backend, and
    /// pipeline configuration.
    pub fn new(driver: D, backend: B, config: AssistantConfig) -> Self {
        Self {
            synthesizer: QuerySynthesizer::new(driver.clone(), config.top_k),
            executor: QueryExecutor::new(backend),
            composer: ResponseComposer::new(driver),
            refusal_prefixes: config.refusal_prefixes,
        }
    }
}

impl<D: KoshDriver, B: QueryBackend> Assistant<D, B> {
    /// Answer a question about the budget data.
    ///
    /// Control flows strictly through the three stages. The executor is
    /// skipped when the synthesizer produced nothing executable: an empty
    /// candidate, the unrelated sentinel, or refusal text, which is passed
    /// to the composer verbatim as the results text.
    #[instrument(skip(self, question))]
    pub async fn answer(&self, question: &str) -> String {
        info!("Processing question");

        let outcome = self.run_to_outcome(question).await;
        let answer = self.composer.compose(question, &outcome).await;

        info!(answer_len = answer.len(), "Finished processing question");
        answer
    }

    /// Run synthesis and execution, folding every failure into an outcome.
    async fn run_to_outcome(&self, question: &str) -> ExecutionOutcome {
        let schema_text = match self.executor.backend().schema_description() {
            Ok(schema_text) => schema_text,
            Err(err) => {
                warn!(error = %err, "Schema reflection failed");
                return ExecutionOutcome::GenericError(err.kind.to_string());
            }
        };

        let candidate = match self.synthesizer.synthesize(question, &schema_text).await {
            Ok(candidate) => candidate,
            Err(err) => {
                warn!(error = %err, "Query synthesis failed");
                return ExecutionOutcome::GenericError(err.to_string());
            }
        };

        self.dispatch(&candidate)
    }

    /// Route a candidate to the executor or straight to a terminal outcome.
    fn dispatch(&self, candidate: &CandidateQuery) -> ExecutionOutcome {
        if candidate.is_empty() {
            debug!("Synthesizer returned no text");
            ExecutionOutcome::could_not_generate()
        } else if candidate.is_unrelated() {
            debug!("Synthesizer judged question unrelated");
            ExecutionOutcome::UnrelatedQuestion
        } else if candidate.is_refusal(&self.refusal_prefixes) {
            debug!(candidate = %candidate, "Synthesizer refused to generate a query");
            ExecutionOutcome::StatusMessage(candidate.as_str().to_string())
        } else {
            self.executor.execute(candidate)
        }
    }
}
