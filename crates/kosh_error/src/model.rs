//! Model provider error types.

/// Model provider error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ModelErrorKind {
    /// HTTP transport failure
    #[display("HTTP error: {}", _0)]
    Http(String),
    /// The provider returned a non-success status
    #[display("API error {}: {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body or error message
        message: String,
    },
    /// Response body could not be parsed
    #[display("Response parsing error: {}", _0)]
    Parse(String),
    /// Request could not be converted to the provider format
    #[display("Request conversion error: {}", _0)]
    Conversion(String),
    /// The response contained no usable output
    #[display("Empty response from model")]
    EmptyResponse,
    /// Provider configuration problem (e.g. missing API key)
    #[display("Model configuration error: {}", _0)]
    Configuration(String),
}

/// Model provider error with source location tracking.
///
/// # Examples
///
/// ```
/// use kosh_error::{ModelError, ModelErrorKind};
///
/// let err = ModelError::new(ModelErrorKind::EmptyResponse);
/// assert!(format!("{}", err).contains("Empty response"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Model Error: {} at line {} in {}", kind, line, file)]
pub struct ModelError {
    /// The kind of error that occurred
    pub kind: ModelErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ModelError {
    /// Create a new ModelError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ModelErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
