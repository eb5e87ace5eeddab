//! Error types for the Dragoman library.
//!
//! All errors are represented by the [`DragomanError`] enum. Errors can only
//! occur while constructing an interpreter (malformed vocabulary tables,
//! unreadable configuration files, rule patterns that fail to compile).
//! Interpretation itself is total: `interpret` always returns a well-formed
//! [`crate::intent::IntentResult`] and never fails.
//!
//! # Examples
//!
//! ```
//! use dragoman::error::{DragomanError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(DragomanError::vocabulary("duplicate route key: cart"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {e}"),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Dragoman operations.
///
/// This enum represents all possible errors that can occur in the Dragoman
/// library. It uses the `thiserror` crate for automatic `Error` trait
/// implementation and provides convenient constructor methods for creating
/// specific error types.
#[derive(Error, Debug)]
pub enum DragomanError {
    /// I/O errors (configuration file access)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Vocabulary-related errors (duplicate keys, empty tables)
    #[error("Vocabulary error: {0}")]
    Vocabulary(String),

    /// Rule pattern errors (regex compilation)
    #[error("Pattern error: {0}")]
    Pattern(String),

    /// Configuration-related errors
    #[error("Config error: {0}")]
    Config(String),

    /// Invalid operation
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with DragomanError.
pub type Result<T> = std::result::Result<T, DragomanError>;

impl DragomanError {
    /// Create a new vocabulary error.
    pub fn vocabulary<S: Into<String>>(msg: S) -> Self {
        DragomanError::Vocabulary(msg.into())
    }

    /// Create a new pattern error.
    pub fn pattern<S: Into<String>>(msg: S) -> Self {
        DragomanError::Pattern(msg.into())
    }

    /// Create a new config error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        DragomanError::Config(msg.into())
    }

    /// Create a new invalid operation error.
    pub fn invalid_operation<S: Into<String>>(msg: S) -> Self {
        DragomanError::InvalidOperation(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        DragomanError::Other(msg.into())
    }
}
