//! Query execution stage.

use crate::candidate::CandidateQuery;
use crate::outcome::ExecutionOutcome;
use kosh_error::DatabaseErrorKind;
use kosh_interface::{QueryBackend, StatementResult};
use tracing::{debug, instrument, warn};

/// Runs a candidate query against the relational store, safely.
///
/// Execution is infallible from the caller's perspective: every failure
/// mode is folded into an [`ExecutionOutcome`] variant so the pipeline
/// always reaches the composer.
///
/// The candidate text is executed verbatim, with no parameterization and
/// no allow-list validation beyond the sentinel pre-checks below. The
/// store is trusted to enforce its own permissions; this is an inherited
/// property of the system, documented rather than redesigned.
#[derive(Debug, Clone)]
pub struct QueryExecutor<B: QueryBackend> {
    backend: B,
}

impl<B: QueryBackend> QueryExecutor<B> {
    /// Create a new executor over the given backend.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// The underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Execute the candidate and normalize the result.
    ///
    /// Pre-checks, in order and both without touching the database:
    /// an empty candidate reports that no query could be generated, and
    /// the unrelated sentinel passes through unchanged.
    #[instrument(skip(self, candidate))]
    pub fn execute(&self, candidate: &CandidateQuery) -> ExecutionOutcome {
        if candidate.is_empty() {
            debug!("Empty candidate, skipping execution");
            return ExecutionOutcome::could_not_generate();
        }
        if candidate.is_unrelated() {
            debug!("Unrelated-question sentinel, skipping execution");
            return ExecutionOutcome::UnrelatedQuestion;
        }

        match self.backend.execute(candidate.as_str()) {
            Ok(StatementResult::Rows(rows)) => {
                debug!(count = rows.len(), "Query returned rows");
                ExecutionOutcome::Rows(rows)
            }
            Ok(StatementResult::Affected(count)) => {
                debug!(affected = count, "Statement affected rows");
                ExecutionOutcome::StatusMessage(format!(
                    "Operation successful, {} rows affected.",
                    count
                ))
            }
            Err(err) => match err.kind {
                DatabaseErrorKind::Backend { code, message } => {
                    warn!(code = %code, message = %message, "Backend rejected statement");
                    ExecutionOutcome::DatabaseError { code, message }
                }
                other => {
                    warn!(error = %other, "Query execution failed");
                    ExecutionOutcome::GenericError(other.to_string())
                }
            },
        }
    }
}
