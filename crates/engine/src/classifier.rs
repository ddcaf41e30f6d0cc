//! Transition classifier
//!
//! Given two optional snapshot ids, a field name, and a reference value,
//! decide how the field's match against the reference changed.
//!
//! ## Absence
//!
//! A missing id, an id the store reports as not found, and a snapshot
//! without the field all collapse to the same thing: an absent value. An
//! absent value never equals the reference.
//!
//! ## Failures
//!
//! Store errors are returned exactly as the store produced them. Nothing
//! here retries, times out, or caches.

use stratawatch_core::{Snapshot, SnapshotId, StoreResult, Value};
use stratawatch_storage::SnapshotStore;
use tracing::debug;

use crate::config::{ClassifierConfig, LookupMode};
use crate::transition::Transition;

/// Classifies field transitions between pairs of snapshots
///
/// Stateless apart from its store handle and config: every call performs
/// its own point-in-time reads and keeps nothing afterwards, so calls may
/// run concurrently without coordination.
///
/// # Example
///
/// ```ignore
/// let classifier = TransitionClassifier::new(store);
/// let outcome = classifier
///     .classify(Some(&before), Some(&after), "history_visibility", &"world_readable".into())
///     .await?;
/// if outcome.is_change() {
///     // react
/// }
/// ```
#[derive(Debug, Clone)]
pub struct TransitionClassifier<S> {
    store: S,
    config: ClassifierConfig,
}

impl<S: SnapshotStore> TransitionClassifier<S> {
    /// Create a classifier with the default config
    pub fn new(store: S) -> Self {
        Self::with_config(store, ClassifierConfig::default())
    }

    /// Create a classifier with an explicit config
    pub fn with_config(store: S, config: ClassifierConfig) -> Self {
        Self { store, config }
    }

    /// The underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The active config
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classify how `field` moved relative to `reference` from `earlier`
    /// to `later`
    ///
    /// # Errors
    ///
    /// Returns the store's error unchanged if either lookup fails for a
    /// reason other than not-found.
    pub async fn classify(
        &self,
        earlier: Option<&SnapshotId>,
        later: Option<&SnapshotId>,
        field: &str,
        reference: &Value,
    ) -> StoreResult<Transition> {
        let (earlier_snapshot, later_snapshot) = self.resolve_pair(earlier, later).await?;

        if earlier_snapshot.is_none() && later_snapshot.is_none() {
            debug!(?earlier, ?later, "neither snapshot exists");
            return Ok(Transition::NeitherMatch);
        }

        let earlier_value = extract(earlier_snapshot.as_ref(), field);
        let later_value = extract(later_snapshot.as_ref(), field);

        debug!(field, ?earlier_value, ?later_value, "resolved field values");

        Ok(Transition::from_matches(
            earlier_value == Some(reference),
            later_value == Some(reference),
        ))
    }

    async fn resolve(&self, id: Option<&SnapshotId>) -> StoreResult<Option<Snapshot>> {
        match id {
            Some(id) => self.store.lookup(id).await,
            None => Ok(None),
        }
    }

    async fn resolve_pair(
        &self,
        earlier: Option<&SnapshotId>,
        later: Option<&SnapshotId>,
    ) -> StoreResult<(Option<Snapshot>, Option<Snapshot>)> {
        match self.config.lookup_mode {
            LookupMode::Concurrent => {
                tokio::try_join!(self.resolve(earlier), self.resolve(later))
            }
            LookupMode::Sequential => {
                let earlier_snapshot = self.resolve(earlier).await?;
                let later_snapshot = self.resolve(later).await?;
                Ok((earlier_snapshot, later_snapshot))
            }
        }
    }
}

fn extract<'a>(snapshot: Option<&'a Snapshot>, field: &str) -> Option<&'a Value> {
    snapshot.and_then(|s| s.field(field))
}
