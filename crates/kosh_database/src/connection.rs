//! Database connection utilities.

use crate::{DatabaseConfig, DatabaseResult};
use diesel::pg::PgConnection;
use diesel::prelude::*;

/// Establish a connection to the PostgreSQL database.
///
/// Callers open one connection per operation; the connection closes when the
/// returned value is dropped.
///
/// # Errors
///
/// Returns an error if the connection to the database fails.
pub fn establish_connection(config: &DatabaseConfig) -> DatabaseResult<PgConnection> {
    let database_url = config.url();
    Ok(PgConnection::establish(&database_url)?)
}
