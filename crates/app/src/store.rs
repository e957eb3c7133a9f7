//! Store handle serializing mutations of the rule set.

use tokio::sync::Mutex;

use thermohub_domain::error::ThermoError;
use thermohub_domain::rules::RuleSet;

use crate::ports::RuleStore;

/// Handle around a [`RuleStore`] that owns the process-wide write lock.
///
/// Reads go straight to the store. Mutations run as one load → mutate →
/// save sequence while holding the lock, so two concurrent updates never
/// interleave and no update is lost. If the mutation fails nothing is
/// saved.
pub struct GuardedStore<S> {
    store: S,
    write_lock: Mutex<()>,
}

impl<S: RuleStore> GuardedStore<S> {
    /// Wrap `store`.
    pub fn new(store: S) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// Borrow the wrapped store.
    pub fn inner(&self) -> &S {
        &self.store
    }

    /// Load the current rule set.
    ///
    /// # Errors
    ///
    /// Propagates storage errors from the wrapped store.
    pub async fn load(&self) -> Result<RuleSet, ThermoError> {
        self.store.load().await
    }

    /// Load, apply `mutate`, and persist the result under the write lock.
    ///
    /// Returns the saved rule set together with the value produced by `mutate`.
    ///
    /// # Errors
    ///
    /// Returns the error of `mutate` (nothing is saved in that case), or a
    /// storage error from loading or saving.
    pub async fn update<T, F>(&self, mutate: F) -> Result<(RuleSet, T), ThermoError>
    where
        F: FnOnce(&mut RuleSet) -> Result<T, ThermoError>,
    {
        let _guard = self.write_lock.lock().await;
        let mut rules = self.store.load().await?;
        let output = mutate(&mut rules)?;
        self.store.save(&rules).await?;
        Ok((rules, output))
    }
}
