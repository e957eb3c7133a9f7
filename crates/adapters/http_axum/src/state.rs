//! Shared application state for axum handlers.

use std::sync::Arc;

use thermohub_app::ports::RuleStore;
use thermohub_app::services::rule_service::RuleService;
use thermohub_app::services::status_service::StatusService;

/// Application state shared across all axum handlers.
///
/// Generic over the rule store to avoid dynamic dispatch.
/// `Clone` is implemented manually so the store itself does not need to be
/// `Clone`; only the `Arc` wrappers are cloned.
pub struct AppState<S> {
    /// Rule tree reads and relay patches.
    pub rule_service: Arc<RuleService<S>>,
    /// Derived sensor readings.
    pub status_service: Arc<StatusService<S>>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            rule_service: Arc::clone(&self.rule_service),
            status_service: Arc::clone(&self.status_service),
        }
    }
}

impl<S> AppState<S>
where
    S: RuleStore + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(rule_service: RuleService<S>, status_service: StatusService<S>) -> Self {
        Self {
            rule_service: Arc::new(rule_service),
            status_service: Arc::new(status_service),
        }
    }
}
