//! Shared types for the pipeline seams.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Result of executing a single SQL statement.
///
/// Statements that produce a result set yield [`StatementResult::Rows`] with
/// one JSON object per row, in statement order. Statements that do not
/// (DDL/DML) yield [`StatementResult::Affected`] with the affected-row count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StatementResult {
    /// An ordered, possibly empty sequence of rows.
    Rows(Vec<JsonValue>),
    /// Number of rows affected by a non-SELECT statement.
    Affected(usize),
}
