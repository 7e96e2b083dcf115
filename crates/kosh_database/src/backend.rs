//! PostgreSQL implementation of the pipeline's query backend.

use crate::{DatabaseConfig, establish_connection, run_statement, schema_description};
use kosh_error::DatabaseError;
use kosh_interface::{QueryBackend, StatementResult};
use tracing::{debug, instrument};

/// Query backend that opens a fresh connection for every call.
///
/// Connections are deliberately not pooled or reused: each statement and
/// each schema snapshot gets its own connection, released when the call
/// returns on every path, error paths included.
#[derive(Debug, Clone)]
pub struct PgQueryBackend {
    config: DatabaseConfig,
}

impl PgQueryBackend {
    /// Create a new backend from connection configuration.
    pub fn new(config: DatabaseConfig) -> Self {
        Self { config }
    }

    /// The connection configuration.
    pub fn config(&self) -> &DatabaseConfig {
        &self.config
    }
}

impl QueryBackend for PgQueryBackend {
    #[instrument(skip(self, sql), fields(db = %self.config.dbname))]
    fn execute(&self, sql: &str) -> Result<StatementResult, DatabaseError> {
        let mut conn = establish_connection(&self.config)?;
        run_statement(&mut conn, sql)
    }

    #[instrument(skip(self), fields(db = %self.config.dbname))]
    fn schema_description(&self) -> Result<String, DatabaseError> {
        let mut conn = establish_connection(&self.config)?;
        let description = schema_description(&mut conn)?;
        debug!(length = description.len(), "Built schema description");
        Ok(description)
    }
}
