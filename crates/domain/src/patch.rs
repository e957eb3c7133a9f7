//! Relay patch: a partial update addressed by a relay's natural key.

use crate::error::{NotFoundError, ThermoError};
use crate::rules::{Relay, RelayKey, RuleSet};
use crate::schedule::{self, ScheduleEntry};

/// Update instruction for a single mutable field.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FieldUpdate<T> {
    /// Keep the stored value.
    #[default]
    Unchanged,
    /// Replace the stored value.
    Set(T),
}

impl<T> FieldUpdate<T> {
    /// Write the new value into `target` when this is [`FieldUpdate::Set`].
    pub fn apply_to(&self, target: &mut T)
    where
        T: Clone,
    {
        if let Self::Set(value) = self {
            target.clone_from(value);
        }
    }

    #[must_use]
    pub fn is_unchanged(&self) -> bool {
        matches!(self, Self::Unchanged)
    }
}

impl<T> From<Option<T>> for FieldUpdate<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Unchanged, Self::Set)
    }
}

/// A partial update of the relay(s) matching `key`.
///
/// `schedule: Set(vec![])` clears the schedule; any other `Set` replaces
/// the whole schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct RelayPatch {
    pub key: RelayKey,
    pub name: FieldUpdate<String>,
    pub enabled: FieldUpdate<bool>,
    pub schedule: FieldUpdate<Vec<ScheduleEntry>>,
}

impl RelayPatch {
    /// Start a patch that changes nothing on the relay identified by `key`.
    #[must_use]
    pub fn new(key: RelayKey) -> Self {
        Self {
            key,
            name: FieldUpdate::Unchanged,
            enabled: FieldUpdate::Unchanged,
            schedule: FieldUpdate::Unchanged,
        }
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = FieldUpdate::Set(name.into());
        self
    }

    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = FieldUpdate::Set(enabled);
        self
    }

    #[must_use]
    pub fn schedule(mut self, schedule: Vec<ScheduleEntry>) -> Self {
        self.schedule = FieldUpdate::Set(schedule);
        self
    }

    /// Check the patch before it touches any rule tree.
    ///
    /// # Errors
    ///
    /// Returns [`ThermoError::Validation`] when the new schedule has an
    /// entry with an empty `time`.
    pub fn validate(&self) -> Result<(), ThermoError> {
        if let FieldUpdate::Set(entries) = &self.schedule {
            schedule::validate(entries)?;
        }
        Ok(())
    }

    /// Validate, then merge this patch into every relay matching the key.
    ///
    /// Returns the number of relays patched. On error `rules` is left
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ThermoError::Validation`] for an invalid schedule and
    /// [`ThermoError::NotFound`] when no relay matches.
    pub fn apply_to(&self, rules: &mut RuleSet) -> Result<usize, ThermoError> {
        self.validate()?;

        let mut matched = 0;
        for relay in rules.relays_matching_mut(&self.key) {
            self.merge_into(relay);
            matched += 1;
        }

        if matched == 0 {
            return Err(NotFoundError {
                pin: self.key.pin,
                designator: self.key.designator.clone(),
            }
            .into());
        }
        Ok(matched)
    }

    fn merge_into(&self, relay: &mut Relay) {
        self.name.apply_to(&mut relay.name);
        self.enabled.apply_to(&mut relay.enabled);
        self.schedule.apply_to(&mut relay.schedule);
    }
}
