//! Time and timestamp helpers.

use chrono::{DateTime, FixedOffset, NaiveTime, Timelike, Utc};

/// UTC timestamp used as the reference instant for schedule resolution.
pub type Timestamp = DateTime<Utc>;

/// Offset (in hours east of UTC) schedules are interpreted in unless
/// configured otherwise.
pub const DEFAULT_UTC_OFFSET_HOURS: i32 = 3;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Build a fixed offset of `hours` east of UTC.
///
/// Returns `None` when the offset is outside `-23..=23`.
#[must_use]
pub fn utc_offset(hours: i32) -> Option<FixedOffset> {
    if !(-23..=23).contains(&hours) {
        return None;
    }
    FixedOffset::east_opt(hours * 3600)
}

/// Parse a schedule time-of-day such as `"08:00"`, `"14:30 PM"` or `"2:30 PM"`.
///
/// The clock part is a 24-hour `HH:MM`. An optional uppercase `AM`/`PM`
/// marker adjusts it: `PM` adds twelve hours to an hour below 12, `AM` turns
/// hour 12 into 0. Returns `None` when the text does not parse.
#[must_use]
pub fn parse_time_of_day(text: &str) -> Option<NaiveTime> {
    let mut parts = text.split_whitespace();
    let clock = parts.next()?;
    let marker = parts.next();
    if parts.next().is_some() {
        return None;
    }

    let time = NaiveTime::parse_from_str(clock, "%H:%M").ok()?;
    let hour = match marker {
        None => time.hour(),
        Some("PM") if time.hour() < 12 => time.hour() + 12,
        Some("AM") if time.hour() == 12 => 0,
        Some("AM" | "PM") => time.hour(),
        Some(_) => return None,
    };
    time.with_hour(hour)
}
