//! Error types for the sarissa-dsl library.
//!
//! Every failure surfaced by translation is represented by the
//! [`SarissaError`] enum. Translation never returns a partial query: the
//! first structural problem found aborts the whole call.
//!
//! # Examples
//!
//! ```
//! use sarissa_dsl::error::{Result, SarissaError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SarissaError::invalid_argument("expected an Operation node"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

/// The main error type for sarissa-dsl operations.
#[derive(Error, Debug)]
pub enum SarissaError {
    /// A structural precondition was violated (wrong node kind, wrong
    /// argument count, empty literal, non-collection IN value, ...).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The operator has no known translation.
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// Query-related errors (e.g. a wildcard pattern that cannot be compiled).
    #[error("Query error: {0}")]
    Query(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with SarissaError.
pub type Result<T> = std::result::Result<T, SarissaError>;

impl SarissaError {
    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        SarissaError::InvalidArgument(msg.into())
    }

    /// Create a new unsupported operation error.
    pub fn unsupported_operation<S: Into<String>>(msg: S) -> Self {
        SarissaError::UnsupportedOperation(msg.into())
    }

    /// Create a new query error.
    pub fn query<S: Into<String>>(msg: S) -> Self {
        SarissaError::Query(msg.into())
    }

    /// Check whether this is an [`SarissaError::InvalidArgument`].
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, SarissaError::InvalidArgument(_))
    }

    /// Check whether this is an [`SarissaError::UnsupportedOperation`].
    pub fn is_unsupported_operation(&self) -> bool {
        matches!(self, SarissaError::UnsupportedOperation(_))
    }
}
