//! Status service: per-relay sensor readings derived from the rule tree.

use std::sync::Arc;

use thermohub_domain::error::ThermoError;
use thermohub_domain::schedule::ScheduleResolver;
use thermohub_domain::status::{self, SensorReading};
use thermohub_domain::time::{self, Timestamp};

use crate::ports::RuleStore;
use crate::store::GuardedStore;

/// Application service projecting the rule tree into sensor readings.
pub struct StatusService<S> {
    store: Arc<GuardedStore<S>>,
    resolver: ScheduleResolver,
}

impl<S: RuleStore> StatusService<S> {
    /// Create a new service reading from `store` and resolving schedules
    /// with `resolver`.
    pub fn new(store: Arc<GuardedStore<S>>, resolver: ScheduleResolver) -> Self {
        Self { store, resolver }
    }

    /// Current sensor readings, one per relay in tree order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store.
    pub async fn sensor_status(&self) -> Result<Vec<SensorReading>, ThermoError> {
        self.sensor_status_at(time::now()).await
    }

    /// Sensor readings as they resolve at `now`.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store.
    pub async fn sensor_status_at(
        &self,
        now: Timestamp,
    ) -> Result<Vec<SensorReading>, ThermoError> {
        let rules = self.store.load().await?;
        Ok(status::project(&rules, &self.resolver, now))
    }
}
