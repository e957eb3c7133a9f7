//! Sensor status: a flat, derived view of every relay and its current target.

use serde::Serialize;

use crate::rules::RuleSet;
use crate::schedule::ScheduleResolver;
use crate::time::Timestamp;

/// One relay's static fields plus the temperature its schedule resolves to.
///
/// Rebuilt on every request, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensorReading {
    pub pin: i64,
    #[serde(rename = "dec")]
    pub designator: String,
    pub relay_id: i64,
    pub temperature: f32,
    #[serde(rename = "enable")]
    pub enabled: bool,
}

/// Project every relay of `rules` into a [`SensorReading`], circuits in
/// order then relays in order.
#[must_use]
pub fn project(rules: &RuleSet, resolver: &ScheduleResolver, now: Timestamp) -> Vec<SensorReading> {
    rules
        .relays()
        .map(|(circuit, relay)| SensorReading {
            pin: relay.pin,
            designator: relay.designator.clone(),
            relay_id: relay.relay_id,
            temperature: resolver.resolve(&relay.schedule, circuit.base_temperature, now),
            enabled: relay.enabled,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{Circuit, Relay};
    use crate::schedule::ScheduleEntry;
    use chrono::{FixedOffset, TimeZone};

    fn resolver() -> ScheduleResolver {
        ScheduleResolver::new(FixedOffset::east_opt(3 * 3600).unwrap())
    }

    #[test]
    fn should_return_empty_list_when_no_circuits() {
        let readings = project(&RuleSet::default(), &resolver(), chrono::Utc::now());
        assert!(readings.is_empty());
    }

    #[test]
    fn should_project_relays_in_tree_order_with_resolved_temperature() {
        let rules = RuleSet {
            circuits: vec![
                Circuit::new("ground", 18.0)
                    .with_relay(
                        Relay::builder()
                            .pin(4)
                            .designator("a")
                            .relay_id(10)
                            .enabled(true)
                            .schedule(vec![ScheduleEntry::new("06:00", 21.0)])
                            .build()
                            .unwrap(),
                    )
                    .with_relay(Relay::builder().pin(5).designator("a").build().unwrap()),
                Circuit::new("attic", 15.0)
                    .with_relay(Relay::builder().pin(4).designator("a").build().unwrap()),
            ],
        };
        // 09:00 UTC+3
        let now = chrono::Utc.with_ymd_and_hms(2024, 1, 5, 6, 0, 0).unwrap();

        let readings = project(&rules, &resolver(), now);

        assert_eq!(readings.len(), 3);
        assert_eq!(readings[0].relay_id, 10);
        assert!(readings[0].enabled);
        assert!((readings[0].temperature - 21.0).abs() < f32::EPSILON);
        assert_eq!(readings[1].pin, 5);
        assert!((readings[1].temperature - 18.0).abs() < f32::EPSILON);
        assert_eq!(readings[2].pin, 4);
        assert!((readings[2].temperature - 15.0).abs() < f32::EPSILON);
    }

    #[test]
    fn should_serialize_with_wire_field_names() {
        let reading = SensorReading {
            pin: 4,
            designator: "a".to_string(),
            relay_id: 2,
            temperature: 19.5,
            enabled: true,
        };
        let value = serde_json::to_value(&reading).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"pin": 4, "dec": "a", "relay_id": 2, "temperature": 19.5, "enable": true})
        );
    }
}
