//! Schema reflection for prompt construction.
//!
//! The query synthesizer needs a textual snapshot of the live schema: which
//! tables exist and which columns they carry. This module queries the
//! PostgreSQL information_schema and renders the result as prompt-ready
//! text. The snapshot is rebuilt on every call rather than cached, so it
//! cannot go stale relative to concurrent schema changes.

use crate::DatabaseResult;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use kosh_error::{DatabaseError, DatabaseErrorKind};
use tracing::{debug, instrument};

/// Represents a database column's structure
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, QueryableByName)]
pub struct ColumnInfo {
    /// Column name
    #[diesel(sql_type = diesel::sql_types::Text)]
    pub name: String,
    /// PostgreSQL data type
    #[diesel(sql_type = diesel::sql_types::Text)]
    pub data_type: String,
    /// Whether the column is nullable ("YES"/"NO")
    #[diesel(sql_type = diesel::sql_types::Text)]
    pub is_nullable: String,
}

/// Represents a table's schema structure
#[derive(Debug, Clone)]
pub struct TableSchema {
    /// Table name
    pub table_name: String,
    /// Columns in the table
    pub columns: Vec<ColumnInfo>,
}

#[derive(QueryableByName)]
struct TableName {
    #[diesel(sql_type = diesel::sql_types::Text)]
    table_name: String,
}

/// List the base tables in the public schema, in name order.
#[instrument(skip(conn))]
pub fn list_public_tables(conn: &mut PgConnection) -> DatabaseResult<Vec<String>> {
    let query = r#"
        SELECT table_name
        FROM information_schema.tables
        WHERE table_schema = 'public'
          AND table_type = 'BASE TABLE'
        ORDER BY table_name
        "#;

    let results: Vec<TableName> = diesel::sql_query(query).load(conn).map_err(|e| {
        DatabaseError::new(DatabaseErrorKind::SchemaReflection(format!(
            "Failed to list tables: {}",
            e
        )))
    })?;

    Ok(results.into_iter().map(|row| row.table_name).collect())
}

/// Query information_schema to get column information for a table
#[instrument(skip(conn), fields(table = %table_name))]
pub fn reflect_table_schema(
    conn: &mut PgConnection,
    table_name: &str,
) -> DatabaseResult<TableSchema> {
    let query = r#"
        SELECT
            column_name as name,
            CASE
                WHEN data_type = 'ARRAY' THEN udt_name
                ELSE data_type
            END as data_type,
            is_nullable
        FROM information_schema.columns
        WHERE table_schema = 'public'
          AND table_name = $1
        ORDER BY ordinal_position
        "#;

    let results: Vec<ColumnInfo> = diesel::sql_query(query)
        .bind::<diesel::sql_types::Text, _>(table_name)
        .load(conn)
        .map_err(|e| {
            DatabaseError::new(DatabaseErrorKind::SchemaReflection(format!(
                "Failed to query schema for table '{}': {}",
                table_name, e
            )))
        })?;

    if results.is_empty() {
        return Err(DatabaseError::new(DatabaseErrorKind::TableNotFound(
            table_name.to_string(),
        )));
    }

    Ok(TableSchema {
        table_name: table_name.to_string(),
        columns: results,
    })
}

/// Build the prompt-ready schema description for all public tables.
///
/// Renders each table as a pseudo-DDL block with double-quoted column
/// names, matching the quoting convention the synthesis prompt instructs
/// the model to use.
#[instrument(skip(conn))]
pub fn schema_description(conn: &mut PgConnection) -> DatabaseResult<String> {
    let tables = list_public_tables(conn)?;
    debug!(count = tables.len(), "Reflecting public tables");

    let mut blocks = Vec::with_capacity(tables.len());
    for table_name in &tables {
        let schema = reflect_table_schema(conn, table_name)?;
        blocks.push(render_table(&schema));
    }

    Ok(blocks.join("\n\n"))
}

/// Render one table schema as pseudo-DDL text.
pub(crate) fn render_table(schema: &TableSchema) -> String {
    let mut text = format!("CREATE TABLE {} (\n", schema.table_name);

    let column_defs: Vec<String> = schema
        .columns
        .iter()
        .map(|col| {
            let mut def = format!("    \"{}\" {}", col.name, col.data_type);
            if col.is_nullable != "YES" {
                def.push_str(" NOT NULL");
            }
            def
        })
        .collect();

    text.push_str(&column_defs.join(",\n"));
    text.push_str("\n)");
    text
}
