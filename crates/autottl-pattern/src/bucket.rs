//! Calendar decomposition of unix timestamps.

use chrono::{DateTime, Datelike, NaiveDate, Timelike};
use chrono_tz::Tz;

/// Calendar coordinates of one timestamp in a given timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeBucket {
    /// Hour of day (0–23).
    pub hour: u32,
    /// Day of week, 0 = Sunday .. 6 = Saturday.
    pub weekday: u32,
    /// Local calendar date; equal iff same local day.
    pub date: NaiveDate,
}

impl TimeBucket {
    /// ISO-8601 date string, e.g. `2024-03-05`.
    pub fn date_key(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// Bucket `timestamp` in `tz`.
///
/// Returns `None` only for timestamps outside chrono's representable range.
pub fn bucket(timestamp: i64, tz: &Tz) -> Option<TimeBucket> {
    let local = DateTime::from_timestamp(timestamp, 0)?.with_timezone(tz);
    Some(TimeBucket {
        hour: local.hour(),
        weekday: local.weekday().num_days_from_sunday(),
        date: local.date_naive(),
    })
}
