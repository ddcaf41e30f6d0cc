//! Main entry point for StrataWatch.
//!
//! This module provides the `Watcher` struct, which pairs an in-memory
//! snapshot store with a transition classifier.

use crate::error::Result;
use std::sync::Arc;
use stratawatch_core::{RecordId, Snapshot, SnapshotId, Value};
use stratawatch_engine::{ClassifierConfig, LookupMode, Transition, TransitionClassifier};
use stratawatch_storage::{ShardedSnapshotStore, SnapshotStore};
use tracing::debug;

/// In-memory snapshot history with transition classification.
///
/// Record snapshots through [`Watcher::store`], then ask how a field moved
/// between any two of them.
///
/// # Example
///
/// ```ignore
/// use stratawatch::prelude::*;
///
/// let watcher = Watcher::ephemeral();
/// let before = watcher.store().append("!room:example.org", [("history_visibility", "shared")]);
/// let after = watcher.store().append("!room:example.org", [("history_visibility", "world_readable")]);
///
/// let outcome = watcher
///     .classify(Some(&before), Some(&after), "history_visibility", &"world_readable".into())
///     .await?;
/// assert_eq!(outcome, Transition::NowMatches);
/// ```
pub struct Watcher {
    store: Arc<ShardedSnapshotStore>,
    classifier: TransitionClassifier<Arc<ShardedSnapshotStore>>,
}

impl Watcher {
    /// Create a watcher with default settings.
    pub fn ephemeral() -> Self {
        Self::builder().build()
    }

    /// Create a builder for watcher configuration.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let watcher = Watcher::builder()
    ///     .sequential_lookups()
    ///     .store_capacity(1024)
    ///     .build();
    /// ```
    pub fn builder() -> WatcherBuilder {
        WatcherBuilder::new()
    }

    /// The snapshot store.
    pub fn store(&self) -> &Arc<ShardedSnapshotStore> {
        &self.store
    }

    /// The classifier config in effect.
    pub fn config(&self) -> &ClassifierConfig {
        self.classifier.config()
    }

    /// Record a snapshot whose fields come from a JSON object.
    ///
    /// Non-object JSON records a snapshot with no fields.
    pub fn record_json(
        &self,
        record: impl Into<RecordId>,
        content: serde_json::Value,
    ) -> SnapshotId {
        self.store.append(record, Snapshot::fields_from_json(content))
    }

    /// Classify how `field` moved relative to `reference` between two
    /// snapshots held by this watcher's store.
    ///
    /// See [`TransitionClassifier::classify`].
    pub async fn classify(
        &self,
        earlier: Option<&SnapshotId>,
        later: Option<&SnapshotId>,
        field: &str,
        reference: &Value,
    ) -> Result<Transition> {
        Ok(self
            .classifier
            .classify(earlier, later, field, reference)
            .await?)
    }

    /// Build a classifier over another store using this watcher's config.
    pub fn classifier_over<S: SnapshotStore>(&self, store: S) -> TransitionClassifier<S> {
        TransitionClassifier::with_config(store, self.config().clone())
    }
}

impl std::fmt::Debug for Watcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Watcher")
            .field("store", &self.store)
            .field("config", self.config())
            .finish()
    }
}

/// Builder for watcher configuration.
#[derive(Debug, Clone, Default)]
pub struct WatcherBuilder {
    config: ClassifierConfig,
    capacity: Option<usize>,
}

impl WatcherBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the two snapshot lookups together (default).
    pub fn concurrent_lookups(mut self) -> Self {
        self.config.lookup_mode = LookupMode::Concurrent;
        self
    }

    /// Issue the earlier lookup, then the later one.
    pub fn sequential_lookups(mut self) -> Self {
        self.config.lookup_mode = LookupMode::Sequential;
        self
    }

    /// Replace the classifier config.
    pub fn config(mut self, config: ClassifierConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the classifier config with one parsed from TOML.
    pub fn config_toml(self, source: &str) -> Result<Self> {
        let config = ClassifierConfig::from_toml_str(source)?;
        Ok(self.config(config))
    }

    /// Pre-size the store for an expected number of records.
    pub fn store_capacity(mut self, records: usize) -> Self {
        self.capacity = Some(records);
        self
    }

    /// Build the watcher.
    pub fn build(self) -> Watcher {
        let store = Arc::new(match self.capacity {
            Some(records) => ShardedSnapshotStore::with_capacity(records),
            None => ShardedSnapshotStore::new(),
        });
        debug!(lookup_mode = ?self.config.lookup_mode, "watcher ready");
        Watcher {
            classifier: TransitionClassifier::with_config(Arc::clone(&store), self.config),
            store,
        }
    }
}
