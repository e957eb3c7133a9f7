//! Rule store port: whole-tree persistence of the rule set.

use std::future::Future;

use thermohub_domain::error::ThermoError;
use thermohub_domain::rules::RuleSet;

/// Backing store holding the single persisted [`RuleSet`].
///
/// Both operations work on the whole tree. Implementations do no locking;
/// callers that mutate go through [`GuardedStore`](crate::store::GuardedStore).
pub trait RuleStore {
    /// Read and parse the full rule set.
    ///
    /// Fails with [`ThermoError::StorageUnavailable`] when the backing
    /// resource cannot be read and [`ThermoError::CorruptData`] when its
    /// content does not parse.
    fn load(&self) -> impl Future<Output = Result<RuleSet, ThermoError>> + Send;

    /// Replace the stored rule set with `rules`.
    ///
    /// Fails with [`ThermoError::StorageUnavailable`] on write failure.
    fn save(&self, rules: &RuleSet) -> impl Future<Output = Result<(), ThermoError>> + Send;
}
