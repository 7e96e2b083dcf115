//! Execution outcomes and their serialization to results text.

use crate::sentinel::{
    COULD_NOT_GENERATE_QUERY, DATABASE_ERROR_PREFIX, GENERAL_ERROR_PREFIX,
    NO_INFORMATION_RETRIEVED, NO_RECORDS_FOUND, UNRELATED_QUERY_ATTEMPT,
};
use serde_json::Value as JsonValue;

/// Rows included verbatim in the composition prompt before truncation.
const MAX_ROWS_FOR_PROMPT: usize = 10;

/// Everything query execution can produce, as an explicit tagged union.
///
/// Historically these travelled between stages as bare sentinel strings;
/// the enum removes string matching from control flow. The legacy strings
/// survive only in [`ExecutionOutcome::results_text`], which feeds the
/// composition prompt's detection steps.
#[derive(Debug, Clone, PartialEq)]
pub enum ExecutionOutcome {
    /// An ordered, possibly empty sequence of result rows.
    Rows(Vec<JsonValue>),
    /// A human-readable status line, passed to the composer verbatim
    /// (affected-row reports, "Could not generate query.", refusal text).
    StatusMessage(String),
    /// The synthesizer judged the question out of domain.
    UnrelatedQuestion,
    /// The backend rejected the statement.
    DatabaseError {
        /// Backend error code discriminator
        code: String,
        /// Backend error message
        message: String,
    },
    /// Any other execution failure (connectivity included).
    GenericError(String),
}

impl ExecutionOutcome {
    /// Convenience constructor for the no-query status.
    pub fn could_not_generate() -> Self {
        ExecutionOutcome::StatusMessage(COULD_NOT_GENERATE_QUERY.to_string())
    }

    /// Serialize the outcome to the text the composition prompt consumes.
    ///
    /// Row sequences are rendered one JSON object per line, capped at ten
    /// rows with a truncation note; an empty sequence becomes the
    /// no-records sentinel. Error variants become their prefixed legacy
    /// strings.
    pub fn results_text(&self) -> String {
        let text = match self {
            ExecutionOutcome::Rows(rows) if rows.is_empty() => NO_RECORDS_FOUND.to_string(),
            ExecutionOutcome::Rows(rows) => render_rows(rows),
            ExecutionOutcome::StatusMessage(status) => status.clone(),
            ExecutionOutcome::UnrelatedQuestion => UNRELATED_QUERY_ATTEMPT.to_string(),
            ExecutionOutcome::DatabaseError { code, message } => {
                format!("{} Code {} - {}", DATABASE_ERROR_PREFIX, code, message)
            }
            ExecutionOutcome::GenericError(message) => {
                format!("{} {}", GENERAL_ERROR_PREFIX, message)
            }
        };

        if text.is_empty() {
            NO_INFORMATION_RETRIEVED.to_string()
        } else {
            text
        }
    }
}

fn render_rows(rows: &[JsonValue]) -> String {
    let mut text = rows
        .iter()
        .take(MAX_ROWS_FOR_PROMPT)
        .map(JsonValue::to_string)
        .collect::<Vec<_>>()
        .join("\n");

    if rows.len() > MAX_ROWS_FOR_PROMPT {
        text.push_str(&format!(
            "\n... (truncated, {} more rows)",
            rows.len() - MAX_ROWS_FOR_PROMPT
        ));
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_rows_become_no_records_sentinel() {
        assert_eq!(ExecutionOutcome::Rows(vec![]).results_text(), "NO_RECORDS_FOUND");
    }

    #[test]
    fn rows_render_one_object_per_line() {
        let outcome = ExecutionOutcome::Rows(vec![
            json!({"BasicPay": 50000}),
            json!({"BasicPay": 41000}),
        ]);
        assert_eq!(
            outcome.results_text(),
            "{\"BasicPay\":50000}\n{\"BasicPay\":41000}"
        );
    }

    #[test]
    fn long_row_sequences_are_truncated_with_a_note() {
        let rows: Vec<JsonValue> = (0..14).map(|i| json!({"n": i})).collect();
        let text = ExecutionOutcome::Rows(rows).results_text();

        assert!(text.contains("{\"n\":9}"));
        assert!(!text.contains("{\"n\":10}"));
        assert!(text.ends_with("... (truncated, 4 more rows)"));
    }

    #[test]
    fn status_message_passes_through_verbatim() {
        let outcome = ExecutionOutcome::StatusMessage("Operation successful, 3 rows affected.".into());
        assert_eq!(outcome.results_text(), "Operation successful, 3 rows affected.");
    }

    #[test]
    fn unrelated_question_serializes_to_its_sentinel() {
        assert_eq!(
            ExecutionOutcome::UnrelatedQuestion.results_text(),
            "UNRELATED_QUERY_ATTEMPT"
        );
    }

    #[test]
    fn database_error_carries_code_and_message() {
        let outcome = ExecutionOutcome::DatabaseError {
            code: "UndefinedColumn".into(),
            message: "column \"Pay\" does not exist".into(),
        };
        assert_eq!(
            outcome.results_text(),
            "DATABASE_ERROR: Code UndefinedColumn - column \"Pay\" does not exist"
        );
    }

    #[test]
    fn generic_error_is_prefixed() {
        let outcome = ExecutionOutcome::GenericError("connection refused".into());
        assert_eq!(outcome.results_text(), "GENERAL_ERROR: connection refused");
    }

    #[test]
    fn empty_status_falls_back_to_no_information() {
        let outcome = ExecutionOutcome::StatusMessage(String::new());
        assert_eq!(outcome.results_text(), "No information was retrieved.");
    }
}
