//! Rule service: read the rule tree and patch individual relays.

use std::sync::Arc;

use thermohub_domain::error::ThermoError;
use thermohub_domain::patch::RelayPatch;
use thermohub_domain::rules::RuleSet;

use crate::ports::RuleStore;
use crate::store::GuardedStore;

/// Application service for the persisted rule tree.
pub struct RuleService<S> {
    store: Arc<GuardedStore<S>>,
}

impl<S: RuleStore> RuleService<S> {
    /// Create a new service backed by the given store handle.
    pub fn new(store: Arc<GuardedStore<S>>) -> Self {
        Self { store }
    }

    /// Load the full rule set.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store.
    pub async fn get_rules(&self) -> Result<RuleSet, ThermoError> {
        self.store.load().await
    }

    /// Apply `patch` to every relay matching its key and persist the tree.
    ///
    /// The load → merge → save sequence runs under the store's write lock.
    /// Nothing is written when the patch is invalid or matches no relay.
    ///
    /// # Errors
    ///
    /// Returns [`ThermoError::Validation`] for a schedule entry with an
    /// empty time, [`ThermoError::NotFound`] when no relay matches, or a
    /// storage error from the store.
    #[tracing::instrument(skip(self, patch), fields(relay = %patch.key))]
    pub async fn patch_relay(&self, patch: RelayPatch) -> Result<RuleSet, ThermoError> {
        patch.validate()?;
        let (rules, matched) = self.store.update(|rules| patch.apply_to(rules)).await?;
        if matched > 1 {
            tracing::warn!(matched, "relay key is shared by several relays, all were patched");
        }
        tracing::debug!(matched, "relay patched");
        Ok(rules)
    }
}
