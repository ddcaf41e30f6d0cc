//! Classifier configuration
//!
//! # Lookup Modes
//!
//! | Mode | Store calls | Error reported |
//! |------|-------------|----------------|
//! | Concurrent | Both in flight together | First to fail |
//! | Sequential | Earlier, then later | Earlier before later |
//!
//! The mode never changes the outcome of a successful classification.
//!
//! Configuration can be built in code or loaded from TOML:
//!
//! ```toml
//! lookup_mode = "sequential"
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How the two snapshot lookups are issued
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupMode {
    /// Issue both lookups together (default)
    #[default]
    Concurrent,
    /// Await the earlier lookup before issuing the later one
    Sequential,
}

/// Classifier settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClassifierConfig {
    /// Lookup scheduling
    pub lookup_mode: LookupMode,
}

impl ClassifierConfig {
    /// Config with both lookups issued concurrently
    pub fn concurrent() -> Self {
        Self {
            lookup_mode: LookupMode::Concurrent,
        }
    }

    /// Config with lookups issued one after the other
    pub fn sequential() -> Self {
        Self {
            lookup_mode: LookupMode::Sequential,
        }
    }

    /// Parse a TOML document
    ///
    /// Missing keys take their defaults; unknown keys are rejected.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        toml::from_str(source).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// TOML could not be parsed into a config
    #[error("invalid classifier config: {0}")]
    Parse(String),
}
