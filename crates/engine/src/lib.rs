//! Classification engine for StrataWatch
//!
//! This crate decides how a watched field moved between two snapshots:
//! - Transition: the four outcomes and the `is_change` predicate
//! - TransitionClassifier: resolves snapshots through a store and classifies
//! - ClassifierConfig: lookup scheduling, loadable from TOML

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod classifier;
pub mod config;
pub mod transition;

pub use classifier::TransitionClassifier;
pub use config::{ClassifierConfig, ConfigError, LookupMode};
pub use transition::Transition;
