//! Database error types.

/// Database error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum DatabaseErrorKind {
    /// Connection failed
    #[display("Database connection error: {}", _0)]
    Connection(String),
    /// The backend rejected a statement
    #[display("Database backend error [{}]: {}", code, message)]
    Backend {
        /// Backend error code discriminator
        code: String,
        /// Backend error message
        message: String,
    },
    /// Query execution failed
    #[display("Database query error: {}", _0)]
    Query(String),
    /// Table not found
    #[display("Table '{}' not found in database", _0)]
    TableNotFound(String),
    /// Schema reflection error
    #[display("Schema reflection error: {}", _0)]
    SchemaReflection(String),
}

/// Database error with source location tracking.
///
/// # Examples
///
/// ```
/// use kosh_error::{DatabaseError, DatabaseErrorKind};
///
/// let err = DatabaseError::new(DatabaseErrorKind::TableNotFound("post_expenses".into()));
/// assert!(format!("{}", err).contains("not found"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Database Error: {} at line {} in {}", kind, line, file)]
pub struct DatabaseError {
    /// The kind of error that occurred
    pub kind: DatabaseErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl DatabaseError {
    /// Create a new DatabaseError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: DatabaseErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl From<diesel::result::Error> for DatabaseError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::DatabaseError(kind, info) => {
                DatabaseError::new(DatabaseErrorKind::Backend {
                    code: format!("{:?}", kind),
                    message: info.message().to_string(),
                })
            }
            _ => DatabaseError::new(DatabaseErrorKind::Query(err.to_string())),
        }
    }
}

impl From<diesel::ConnectionError> for DatabaseError {
    fn from(err: diesel::ConnectionError) -> Self {
        DatabaseError::new(DatabaseErrorKind::Connection(err.to_string()))
    }
}
