//! Store error types
//!
//! A missing snapshot is never an error: stores report it as `Ok(None)`.
//! `StoreError` covers genuine infrastructure failures only, and callers
//! above the store receive it unchanged.

use thiserror::Error;

/// Infrastructure failure reported by a snapshot store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Store is temporarily unreachable
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// Lookup did not complete in time
    #[error("store lookup timed out after {millis}ms")]
    Timeout {
        /// Elapsed time before giving up
        millis: u64,
    },

    /// Stored data failed validation
    #[error("corruption: {0}")]
    Corruption(String),

    /// Internal error (bug or invariant violation)
    #[error("internal error: {0}")]
    Internal(String),
}

impl StoreError {
    /// Check if this error is transient.
    ///
    /// The classifier never retries; this is a hint for callers.
    pub fn is_retryable(&self) -> bool {
        matches!(self, StoreError::Unavailable(_) | StoreError::Timeout { .. })
    }
}

/// Result type for store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;
