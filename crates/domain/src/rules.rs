//! Rule tree: circuits of relays, each relay carrying an optional schedule.
//!
//! The serialized shape is the persisted file format:
//!
//! ```json
//! {"circuits":[{"name":"","temperature":18,"parent_relay_id":1,
//!   "relays":[{"pin":4,"dec":"a","relay_id":2,"name":"","enable":true,
//!     "schedule":[{"time":"08:00 AM","temperature":21}]}]}]}
//! ```

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ThermoError;
use crate::schedule::{self, ScheduleEntry};

/// The full persisted configuration: an ordered list of circuits.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleSet {
    pub circuits: Vec<Circuit>,
}

/// A named group of relays sharing a base temperature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    #[serde(default)]
    pub name: String,
    /// Temperature used when no schedule entry applies.
    #[serde(rename = "temperature")]
    pub base_temperature: f32,
    #[serde(default)]
    pub parent_relay_id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub relays: Vec<Relay>,
}

/// An individually addressable heating element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relay {
    pub pin: i64,
    #[serde(rename = "dec")]
    pub designator: String,
    #[serde(default)]
    pub relay_id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "enable", default)]
    pub enabled: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub schedule: Vec<ScheduleEntry>,
}

/// Natural key of a relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayKey {
    pub pin: i64,
    pub designator: String,
}

impl RelayKey {
    #[must_use]
    pub fn new(pin: i64, designator: impl Into<String>) -> Self {
        Self {
            pin,
            designator: designator.into(),
        }
    }
}

impl fmt::Display for RelayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.pin, self.designator)
    }
}

impl RuleSet {
    /// Iterate over every relay with its owning circuit, circuits first.
    pub fn relays(&self) -> impl Iterator<Item = (&Circuit, &Relay)> {
        self.circuits
            .iter()
            .flat_map(|circuit| circuit.relays.iter().map(move |relay| (circuit, relay)))
    }

    /// Iterate mutably over every relay whose key equals `key`.
    ///
    /// Duplicated keys across circuits are all yielded.
    pub fn relays_matching_mut<'a>(
        &'a mut self,
        key: &'a RelayKey,
    ) -> impl Iterator<Item = &'a mut Relay> + 'a {
        self.circuits
            .iter_mut()
            .flat_map(|circuit| circuit.relays.iter_mut())
            .filter(move |relay| relay.matches(key))
    }
}

impl Circuit {
    #[must_use]
    pub fn new(name: impl Into<String>, base_temperature: f32) -> Self {
        Self {
            name: name.into(),
            base_temperature,
            parent_relay_id: 0,
            relays: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_parent_relay_id(mut self, parent_relay_id: i64) -> Self {
        self.parent_relay_id = parent_relay_id;
        self
    }

    #[must_use]
    pub fn with_relay(mut self, relay: Relay) -> Self {
        self.relays.push(relay);
        self
    }
}

impl Relay {
    /// Create a builder for constructing a [`Relay`].
    #[must_use]
    pub fn builder() -> RelayBuilder {
        RelayBuilder::default()
    }

    #[must_use]
    pub fn key(&self) -> RelayKey {
        RelayKey::new(self.pin, self.designator.clone())
    }

    #[must_use]
    pub fn matches(&self, key: &RelayKey) -> bool {
        self.pin == key.pin && self.designator == key.designator
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ThermoError::Validation`] when a schedule entry has an empty `time`.
    pub fn validate(&self) -> Result<(), ThermoError> {
        schedule::validate(&self.schedule)?;
        Ok(())
    }
}

/// Step-by-step builder for [`Relay`].
#[derive(Debug, Default)]
pub struct RelayBuilder {
    pin: i64,
    designator: String,
    relay_id: i64,
    name: String,
    enabled: bool,
    schedule: Vec<ScheduleEntry>,
}

impl RelayBuilder {
    #[must_use]
    pub fn pin(mut self, pin: i64) -> Self {
        self.pin = pin;
        self
    }

    #[must_use]
    pub fn designator(mut self, designator: impl Into<String>) -> Self {
        self.designator = designator.into();
        self
    }

    #[must_use]
    pub fn relay_id(mut self, relay_id: i64) -> Self {
        self.relay_id = relay_id;
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    #[must_use]
    pub fn schedule(mut self, schedule: Vec<ScheduleEntry>) -> Self {
        self.schedule = schedule;
        self
    }

    /// Consume the builder, validate, and return a [`Relay`].
    ///
    /// # Errors
    ///
    /// Returns [`ThermoError::Validation`] if a schedule entry has an empty `time`.
    pub fn build(self) -> Result<Relay, ThermoError> {
        let relay = Relay {
            pin: self.pin,
            designator: self.designator,
            relay_id: self.relay_id,
            name: self.name,
            enabled: self.enabled,
            schedule: self.schedule,
        };
        relay.validate()?;
        Ok(relay)
    }
}

/// Treat an explicit `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    fn sample() -> RuleSet {
        RuleSet {
            circuits: vec![
                Circuit::new("ground", 18.0)
                    .with_parent_relay_id(1)
                    .with_relay(Relay::builder().pin(4).designator("a").build().unwrap())
                    .with_relay(Relay::builder().pin(5).designator("a").build().unwrap()),
                Circuit::new("attic", 15.0)
                    .with_relay(Relay::builder().pin(4).designator("b").build().unwrap()),
            ],
        }
    }

    #[test]
    fn should_iterate_relays_in_tree_order() {
        let rules = sample();
        let keys: Vec<String> = rules.relays().map(|(_, r)| r.key().to_string()).collect();
        assert_eq!(keys, vec!["4/a", "5/a", "4/b"]);
    }

    #[test]
    fn should_match_on_pin_and_designator_only() {
        let mut rules = sample();
        let key = RelayKey::new(4, "b");
        let matched: Vec<_> = rules.relays_matching_mut(&key).collect();
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].designator, "b");
    }

    #[test]
    fn should_reject_relay_with_empty_schedule_time() {
        let result = Relay::builder()
            .pin(1)
            .designator("a")
            .schedule(vec![ScheduleEntry::new("", 20.0)])
            .build();
        assert!(matches!(
            result,
            Err(ThermoError::Validation(
                ValidationError::EmptyScheduleTime { .. }
            ))
        ));
    }

    #[test]
    fn should_parse_persisted_file_shape() {
        let json = serde_json::json!({
            "circuits": [{
                "name": "ground",
                "temperature": 18.5,
                "parent_relay_id": 7,
                "relays": [{
                    "pin": 4,
                    "dec": "a",
                    "relay_id": 2,
                    "name": "kitchen",
                    "enable": true,
                    "schedule": [{"time": "08:00 AM", "temperature": 21}]
                }]
            }]
        });
        let rules: RuleSet = serde_json::from_value(json).unwrap();
        let circuit = &rules.circuits[0];
        assert!((circuit.base_temperature - 18.5).abs() < f32::EPSILON);
        assert_eq!(circuit.parent_relay_id, 7);
        let relay = &circuit.relays[0];
        assert_eq!(relay.key(), RelayKey::new(4, "a"));
        assert!(relay.enabled);
        assert_eq!(relay.schedule, vec![ScheduleEntry::new("08:00 AM", 21.0)]);
    }

    #[test]
    fn should_load_null_schedule_as_empty() {
        let json = r#"{"pin":1,"dec":"x","schedule":null}"#;
        let relay: Relay = serde_json::from_str(json).unwrap();
        assert!(relay.schedule.is_empty());
        assert!(!relay.enabled);
    }

    #[test]
    fn should_serialize_with_file_field_names() {
        let rules = sample();
        let value = serde_json::to_value(&rules).unwrap();
        let relay = &value["circuits"][0]["relays"][0];
        assert_eq!(value["circuits"][0]["temperature"], 18.0);
        assert_eq!(relay["dec"], "a");
        assert_eq!(relay["enable"], false);
        assert_eq!(relay["schedule"], serde_json::json!([]));
    }

    #[test]
    fn should_reject_missing_circuits() {
        let result: Result<RuleSet, _> = serde_json::from_str(r#"{"zones":[]}"#);
        assert!(result.is_err());
    }
}
