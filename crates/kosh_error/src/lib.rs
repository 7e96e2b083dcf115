//! Error types for the Kosh budget assistant.
//!
//! This crate provides the foundation error types used throughout the Kosh
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error
//! handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use kosh_error::{KoshResult, ConfigError};
//!
//! fn load_setting() -> KoshResult<String> {
//!     Err(ConfigError::new("OPENAI_API_KEY not set"))?
//! }
//!
//! match load_setting() {
//!     Ok(value) => println!("Got: {}", value),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
#[cfg(feature = "database")]
mod database;
mod error;
mod model;

pub use config::ConfigError;
#[cfg(feature = "database")]
pub use database::{DatabaseError, DatabaseErrorKind};
pub use error::{KoshError, KoshErrorKind, KoshResult};
pub use model::{ModelError, ModelErrorKind};
