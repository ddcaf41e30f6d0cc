//! Unified error types for StrataWatch.
//!
//! This module wraps the crate-level errors so callers of the facade match
//! on a single type. Store failures pass through untouched.

use stratawatch_core::StoreError;
use stratawatch_engine::ConfigError;
use thiserror::Error;

/// All StrataWatch errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Snapshot store failure, exactly as the store reported it
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Invalid configuration
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type for StrataWatch operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error is retryable.
    ///
    /// Only transient store failures are; nothing in this crate retries
    /// on its own.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Store(e) => e.is_retryable(),
            Error::Config(_) => false,
        }
    }

    /// The store error, if this is one.
    pub fn as_store_error(&self) -> Option<&StoreError> {
        match self {
            Error::Store(e) => Some(e),
            Error::Config(_) => None,
        }
    }
}
