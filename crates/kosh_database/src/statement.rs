//! Raw statement execution for model-generated SQL.
//!
//! The statement text arrives verbatim from the query synthesizer and is
//! executed without parameterization or allow-list validation; the only
//! guards live upstream in the executor's sentinel pre-checks. This is an
//! inherited property of the system, documented rather than redesigned.

use crate::DatabaseResult;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use kosh_interface::StatementResult;
use serde_json::Value as JsonValue;
use tracing::{debug, instrument};

/// Leading keywords of statements that produce a result set.
const RESULT_SET_KEYWORDS: [&str; 6] = ["select", "with", "values", "show", "table", "explain"];

/// Whether a statement's leading keyword indicates a result set.
///
/// PostgreSQL drivers know this from the wire protocol; with diesel we
/// decide up front because result-set statements take a different execution
/// path. A DML statement with a RETURNING clause is treated as row-less and
/// reports its affected count instead.
pub(crate) fn returns_rows(sql: &str) -> bool {
    let first_word = sql
        .trim_start()
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_lowercase();
    RESULT_SET_KEYWORDS.contains(&first_word.as_str())
}

/// Strip trailing semicolons so the statement can be used as a subquery.
pub(crate) fn strip_terminator(sql: &str) -> &str {
    sql.trim().trim_end_matches(';').trim_end()
}

#[derive(QueryableByName)]
struct JsonRow {
    #[diesel(sql_type = diesel::sql_types::Json)]
    json: JsonValue,
}

/// Execute a single SQL statement.
///
/// Result-set statements are wrapped in `row_to_json` so arbitrary column
/// lists come back as JSON objects in statement order. Everything else is
/// executed directly and reports its affected-row count.
///
/// # Errors
///
/// Returns an error when the backend rejects the statement; callers decide
/// how to surface it.
#[instrument(skip(conn, sql), fields(sql_len = sql.len()))]
pub fn run_statement(conn: &mut PgConnection, sql: &str) -> DatabaseResult<StatementResult> {
    debug!(sql = %sql, "Executing SQL");

    if returns_rows(sql) {
        let wrapped = format!(
            "SELECT row_to_json(t) AS json FROM ({}) t",
            strip_terminator(sql)
        );
        let rows: Vec<JsonRow> = diesel::sql_query(&wrapped).load(conn)?;
        debug!(count = rows.len(), "Query returned rows");
        Ok(StatementResult::Rows(
            rows.into_iter().map(|row| row.json).collect(),
        ))
    } else {
        let affected = diesel::sql_query(sql).execute(conn)?;
        debug!(affected = affected, "Statement affected rows");
        Ok(StatementResult::Affected(affected))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_result_set_statements() {
        assert!(returns_rows("SELECT 1"));
        assert!(returns_rows("  select \"BasicPay\" from budget_post_details"));
        assert!(returns_rows("WITH t AS (SELECT 1) SELECT * FROM t"));
        assert!(returns_rows("EXPLAIN SELECT 1"));
    }

    #[test]
    fn detects_row_less_statements() {
        assert!(!returns_rows("UPDATE post_status SET \"Status\" = 'Filled'"));
        assert!(!returns_rows("DELETE FROM post_expenses"));
        assert!(!returns_rows("CREATE TABLE t (id int)"));
        assert!(!returns_rows(""));
    }

    #[test]
    fn strips_trailing_semicolons() {
        assert_eq!(strip_terminator("SELECT 1;"), "SELECT 1");
        assert_eq!(strip_terminator("  SELECT 1 ;; "), "SELECT 1");
        assert_eq!(strip_terminator("SELECT 1"), "SELECT 1");
    }
}
