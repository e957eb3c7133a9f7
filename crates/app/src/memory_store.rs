//! In-process rule store kept in memory.

use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use thermohub_domain::error::ThermoError;
use thermohub_domain::rules::RuleSet;

use crate::ports::RuleStore;

/// [`RuleStore`] holding the rule set in memory.
///
/// Useful for tests and demos; nothing survives the process. Counts the
/// number of successful saves so callers can assert that nothing was
/// written.
#[derive(Debug, Default)]
pub struct InMemoryRuleStore {
    rules: Mutex<RuleSet>,
    saves: AtomicUsize,
}

impl InMemoryRuleStore {
    /// Create a store seeded with `rules`.
    #[must_use]
    pub fn new(rules: RuleSet) -> Self {
        Self {
            rules: Mutex::new(rules),
            saves: AtomicUsize::new(0),
        }
    }

    /// Copy of the currently stored rule set.
    #[must_use]
    pub fn snapshot(&self) -> RuleSet {
        self.rules
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of saves performed since creation.
    #[must_use]
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

impl RuleStore for InMemoryRuleStore {
    fn load(&self) -> impl Future<Output = Result<RuleSet, ThermoError>> + Send {
        let rules = self.snapshot();
        async { Ok(rules) }
    }

    fn save(&self, rules: &RuleSet) -> impl Future<Output = Result<(), ThermoError>> + Send {
        *self.rules.lock().unwrap_or_else(PoisonError::into_inner) = rules.clone();
        self.saves.fetch_add(1, Ordering::SeqCst);
        async { Ok(()) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use thermohub_domain::rules::Circuit;

    #[tokio::test]
    async fn should_load_seeded_rules() {
        let rules = RuleSet {
            circuits: vec![Circuit::new("ground", 18.0)],
        };
        let store = InMemoryRuleStore::new(rules.clone());
        assert_eq!(store.load().await.unwrap(), rules);
        assert_eq!(store.save_count(), 0);
    }

    #[tokio::test]
    async fn should_replace_rules_and_count_saves() {
        let store = InMemoryRuleStore::default();
        let rules = RuleSet {
            circuits: vec![Circuit::new("attic", 15.0)],
        };
        store.save(&rules).await.unwrap();
        assert_eq!(store.snapshot(), rules);
        assert_eq!(store.save_count(), 1);
    }
}
