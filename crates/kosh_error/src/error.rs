//! Top-level error wrapper types.

use crate::{ConfigError, ModelError};
#[cfg(feature = "database")]
use crate::DatabaseError;

/// This is the foundation error enum for the Kosh workspace.
///
/// # Examples
///
/// ```
/// use kosh_error::{KoshError, ConfigError};
///
/// let config_err = ConfigError::new("Missing field");
/// let err: KoshError = config_err.into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum KoshErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Model provider error
    #[from(ModelError)]
    Model(ModelError),
    /// Database error
    #[cfg(feature = "database")]
    #[from(DatabaseError)]
    Database(DatabaseError),
}

/// Kosh error with kind discrimination.
///
/// # Examples
///
/// ```
/// use kosh_error::{KoshResult, ConfigError};
///
/// fn might_fail() -> KoshResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Kosh Error: {}", _0)]
pub struct KoshError(Box<KoshErrorKind>);

impl KoshError {
    /// Create a new error from a kind.
    pub fn new(kind: KoshErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &KoshErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to KoshErrorKind
impl<T> From<T> for KoshError
where
    T: Into<KoshErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Kosh operations.
///
/// # Examples
///
/// ```
/// use kosh_error::{KoshResult, ModelError, ModelErrorKind};
///
/// fn generate() -> KoshResult<String> {
///     Err(ModelError::new(ModelErrorKind::EmptyResponse))?
/// }
/// ```
pub type KoshResult<T> = std::result::Result<T, KoshError>;
