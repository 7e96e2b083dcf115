//! PostgreSQL integration for the Kosh budget assistant.
//!
//! This crate provides the relational-store side of the question-answering
//! pipeline:
//!
//! - Explicit connection configuration built from environment variables
//! - Per-call connection establishment (no pooling)
//! - information_schema reflection into a prompt-ready schema description
//! - Raw statement execution for the model-generated SQL
//!
//! # Example
//!
//! ```rust,ignore
//! use kosh_database::{DatabaseConfig, PgQueryBackend};
//! use kosh_interface::QueryBackend;
//!
//! let config = DatabaseConfig::from_env()?;
//! let backend = PgQueryBackend::new(config);
//! let result = backend.execute("SELECT 1")?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod backend;
mod config;
mod connection;
mod schema_reflection;
mod statement;

pub use backend::PgQueryBackend;
pub use config::DatabaseConfig;
pub use connection::establish_connection;
pub use schema_reflection::{
    ColumnInfo, TableSchema, list_public_tables, reflect_table_schema, schema_description,
};
pub use statement::run_statement;

use kosh_error::DatabaseError;

/// Result type for database operations.
pub type DatabaseResult<T> = Result<T, DatabaseError>;
