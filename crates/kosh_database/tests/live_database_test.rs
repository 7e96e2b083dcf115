// Integration tests against a live Budget_Gov database.
//
// These tests require DB_* environment variables (or a .env file) pointing
// at a running PostgreSQL instance, so they are ignored by default:
//
//     cargo test -p kosh_database -- --ignored

use kosh_database::{DatabaseConfig, PgQueryBackend};
use kosh_interface::{QueryBackend, StatementResult};

fn backend_from_env() -> PgQueryBackend {
    let _ = dotenvy::dotenv();
    let config = DatabaseConfig::from_env().expect("Failed to read database config");
    PgQueryBackend::new(config)
}

#[test]
#[ignore]
fn select_one_returns_a_single_row() {
    let backend = backend_from_env();

    let result = backend.execute("SELECT 1 AS one").expect("Query failed");
    match result {
        StatementResult::Rows(rows) => {
            assert_eq!(rows.len(), 1);
            assert_eq!(rows[0]["one"], 1);
        }
        StatementResult::Affected(_) => panic!("SELECT should produce rows"),
    }
}

#[test]
#[ignore]
fn zero_row_select_returns_empty_sequence() {
    let backend = backend_from_env();

    let result = backend
        .execute("SELECT 1 AS one WHERE false")
        .expect("Query failed");
    assert_eq!(result, StatementResult::Rows(vec![]));
}

#[test]
#[ignore]
fn schema_description_lists_public_tables() {
    let backend = backend_from_env();

    let description = backend
        .schema_description()
        .expect("Schema reflection failed");
    assert!(description.contains("CREATE TABLE"));
}

#[test]
#[ignore]
fn malformed_sql_is_a_backend_error() {
    let backend = backend_from_env();

    let err = backend
        .execute("SELECT FROM nowhere AT ALL")
        .expect_err("Malformed SQL should fail");
    assert!(!err.to_string().is_empty());
}
