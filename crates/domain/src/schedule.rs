//! Schedule: time-of-day checkpoints and the resolution of the one in force.

use chrono::{FixedOffset, TimeDelta};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::time::{self, Timestamp};

/// A checkpoint pairing a wall-clock time of day with a target temperature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Time of day, e.g. `"14:30 PM"`. See [`time::parse_time_of_day`].
    pub time: String,
    pub temperature: f32,
}

impl ScheduleEntry {
    #[must_use]
    pub fn new(time: impl Into<String>, temperature: f32) -> Self {
        Self {
            time: time.into(),
            temperature,
        }
    }
}

/// Reject a schedule containing an entry with an empty `time`.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyScheduleTime`] carrying the whole
/// schedule serialized as JSON.
pub fn validate(schedule: &[ScheduleEntry]) -> Result<(), ValidationError> {
    if schedule.iter().any(|entry| entry.time.is_empty()) {
        return Err(ValidationError::EmptyScheduleTime {
            schedule: serde_json::to_string(schedule).unwrap_or_default(),
        });
    }
    Ok(())
}

/// Picks the scheduled temperature in force at a given instant.
///
/// Schedules are interpreted in a single fixed UTC offset. Only entries
/// whose time of day has already passed *today* are candidates; the most
/// recently passed one wins. Nothing carries over from the previous day.
#[derive(Debug, Clone, Copy)]
pub struct ScheduleResolver {
    offset: FixedOffset,
}

impl ScheduleResolver {
    #[must_use]
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    /// Return the temperature of the most recently passed entry of today,
    /// or `fallback` when none has passed yet.
    ///
    /// An entry exactly at `now` has not passed. Entries whose time does
    /// not parse are skipped and reported through `tracing`.
    #[must_use]
    pub fn resolve(&self, schedule: &[ScheduleEntry], fallback: f32, now: Timestamp) -> f32 {
        let local_now = now.with_timezone(&self.offset);
        let today = local_now.date_naive();

        let mut best: Option<(TimeDelta, f32)> = None;
        for entry in schedule {
            let Some(time_of_day) = time::parse_time_of_day(&entry.time) else {
                tracing::warn!(time = %entry.time, "skipping schedule entry with unparseable time");
                continue;
            };
            let Some(candidate) = today
                .and_time(time_of_day)
                .and_local_timezone(self.offset)
                .single()
            else {
                continue;
            };

            let diff = local_now.signed_duration_since(candidate);
            if diff > TimeDelta::zero() && best.is_none_or(|(closest, _)| diff < closest) {
                best = Some((diff, entry.temperature));
            }
        }

        best.map_or(fallback, |(_, temperature)| temperature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    const BASE: f32 = 16.0;

    fn resolver() -> ScheduleResolver {
        ScheduleResolver::new(FixedOffset::east_opt(3 * 3600).unwrap())
    }

    /// Build a UTC instant from a wall-clock time in UTC+3.
    fn at(h: u32, m: u32, s: u32) -> Timestamp {
        let local = NaiveDate::from_ymd_opt(2024, 3, 10)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap();
        FixedOffset::east_opt(3 * 3600)
            .unwrap()
            .from_local_datetime(&local)
            .unwrap()
            .to_utc()
    }

    fn day_schedule() -> Vec<ScheduleEntry> {
        vec![
            ScheduleEntry::new("08:00 AM", 20.0),
            ScheduleEntry::new("14:00 PM", 22.0),
            ScheduleEntry::new("18:00 PM", 19.0),
        ]
    }

    #[test]
    fn should_pick_most_recent_past_entry() {
        let temp = resolver().resolve(&day_schedule(), BASE, at(15, 0, 0));
        assert!((temp - 22.0).abs() < f32::EPSILON);
    }

    #[test]
    fn should_pick_most_recent_entry_regardless_of_list_order() {
        let mut schedule = day_schedule();
        schedule.reverse();
        let temp = resolver().resolve(&schedule, BASE, at(19, 30, 0));
        assert!((temp - 19.0).abs() < f32::EPSILON);
    }

    #[test]
    fn should_return_fallback_when_every_entry_is_later_today() {
        let temp = resolver().resolve(&day_schedule(), BASE, at(7, 59, 59));
        assert!((temp - BASE).abs() < f32::EPSILON);
    }

    #[test]
    fn should_not_carry_yesterdays_last_entry_past_midnight() {
        let temp = resolver().resolve(&day_schedule(), BASE, at(0, 30, 0));
        assert!((temp - BASE).abs() < f32::EPSILON);
    }

    #[test]
    fn should_return_fallback_when_schedule_is_empty() {
        let temp = resolver().resolve(&[], BASE, at(12, 0, 0));
        assert!((temp - BASE).abs() < f32::EPSILON);
    }

    #[test]
    fn should_exclude_entry_exactly_at_now() {
        let temp = resolver().resolve(&day_schedule(), BASE, at(14, 0, 0));
        assert!((temp - 20.0).abs() < f32::EPSILON);
    }

    #[test]
    fn should_select_entry_one_second_after_it_passes() {
        let temp = resolver().resolve(&day_schedule(), BASE, at(14, 0, 1));
        assert!((temp - 22.0).abs() < f32::EPSILON);
    }

    #[test]
    fn should_skip_unparseable_entries() {
        let schedule = vec![
            ScheduleEntry::new("08:00", 20.0),
            ScheduleEntry::new("lunchtime", 30.0),
        ];
        let temp = resolver().resolve(&schedule, BASE, at(13, 0, 0));
        assert!((temp - 20.0).abs() < f32::EPSILON);
    }

    #[test]
    fn should_skip_entries_with_lowercase_marker() {
        let schedule = vec![
            ScheduleEntry::new("08:00 AM", 20.0),
            ScheduleEntry::new("02:30 pm", 25.0),
        ];
        let temp = resolver().resolve(&schedule, BASE, at(15, 0, 0));
        assert!((temp - 20.0).abs() < f32::EPSILON);
    }

    #[test]
    fn should_keep_first_entry_on_identical_times() {
        let schedule = vec![
            ScheduleEntry::new("09:00", 21.0),
            ScheduleEntry::new("09:00 AM", 23.0),
        ];
        let temp = resolver().resolve(&schedule, BASE, at(10, 0, 0));
        assert!((temp - 21.0).abs() < f32::EPSILON);
    }

    #[test]
    fn should_interpret_times_in_configured_offset() {
        // 10:00 UTC is 13:00 in UTC+3 but 10:00 in UTC.
        let now = chrono::Utc.with_ymd_and_hms(2024, 3, 10, 10, 0, 0).unwrap();
        let schedule = vec![ScheduleEntry::new("12:00", 25.0)];

        let in_plus_three = resolver().resolve(&schedule, BASE, now);
        let in_utc = ScheduleResolver::new(FixedOffset::east_opt(0).unwrap())
            .resolve(&schedule, BASE, now);

        assert!((in_plus_three - 25.0).abs() < f32::EPSILON);
        assert!((in_utc - BASE).abs() < f32::EPSILON);
    }

    #[test]
    fn should_accept_schedule_without_empty_times() {
        assert!(validate(&day_schedule()).is_ok());
        assert!(validate(&[]).is_ok());
    }

    #[test]
    fn should_reject_schedule_with_empty_time() {
        let schedule = vec![
            ScheduleEntry::new("08:00", 20.0),
            ScheduleEntry::new("", 21.0),
        ];
        let err = validate(&schedule).unwrap_err();
        let ValidationError::EmptyScheduleTime { schedule } = err;
        assert!(schedule.contains(r#""time":"""#));
    }
}
