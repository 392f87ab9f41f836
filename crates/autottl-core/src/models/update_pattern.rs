use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::DAYS_PER_WEEK;

/// Aggregates for one hour-of-day bucket.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HourProfile {
    /// Entries bucketed into this hour divided by the number of covered days.
    pub density: f64,
    /// Mean gap (seconds) following entries in this hour; 0 if none observed.
    pub interval: f64,
}

/// Aggregates for one weekday bucket.
///
/// Interval and presence travel together so the two can never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WeekdayProfile {
    /// Mean gap (seconds) following entries on this weekday; 0 if none observed.
    pub interval: f64,
    /// True iff at least one positive gap was recorded for this weekday.
    pub has_updates: bool,
}

impl WeekdayProfile {
    /// Usable for prediction: observed and strictly positive.
    pub fn is_usable(&self) -> bool {
        self.has_updates && self.interval > 0.0
    }
}

/// Statistical profile of a feed's historical update timing.
///
/// Built once per analysis cycle and never mutated afterwards; the caches
/// share it behind an `Arc` and replace it wholesale on refresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdatePattern {
    /// Per-hour aggregates, only for hours present in the input.
    pub hours: BTreeMap<u32, HourProfile>,
    /// Per-weekday aggregates, always all seven (0 = Sunday .. 6 = Saturday).
    pub weekdays: [WeekdayProfile; DAYS_PER_WEEK],
    pub total_entries: usize,
    /// Distinct calendar dates among the analyzed entries.
    pub days_covered: usize,
    pub has_enough_data: bool,
    /// (last − first) / (n − 1); 0 with fewer than two entries.
    pub simple_avg_interval: f64,
    /// Unix timestamp of the analysis, used for cache expiry.
    pub last_analysis_time: i64,
}

impl UpdatePattern {
    /// A pattern with no data, analyzed at `analyzed_at`.
    pub fn empty(analyzed_at: i64) -> Self {
        Self {
            hours: BTreeMap::new(),
            weekdays: [WeekdayProfile::default(); DAYS_PER_WEEK],
            total_entries: 0,
            days_covered: 0,
            has_enough_data: false,
            simple_avg_interval: 0.0,
            last_analysis_time: analyzed_at,
        }
    }

    pub fn hour_density(&self, hour: u32) -> Option<f64> {
        self.hours.get(&hour).map(|h| h.density)
    }

    pub fn hour_interval(&self, hour: u32) -> Option<f64> {
        self.hours.get(&hour).map(|h| h.interval)
    }

    /// Weekday profile; `None` for an out-of-range index.
    pub fn weekday(&self, day: u32) -> Option<&WeekdayProfile> {
        self.weekdays.get(day as usize)
    }

    /// Mean of all non-zero hour intervals.
    pub fn mean_hour_interval(&self) -> Option<f64> {
        mean_positive(self.hours.values().map(|h| h.interval))
    }

    /// Mean of all non-zero hour densities.
    pub fn mean_hour_density(&self) -> Option<f64> {
        mean_positive(self.hours.values().map(|h| h.density))
    }

    /// Mean interval over the weekdays that are usable for prediction.
    pub fn mean_weekday_interval(&self) -> Option<f64> {
        mean_positive(
            self.weekdays
                .iter()
                .filter(|d| d.is_usable())
                .map(|d| d.interval),
        )
    }

    /// True if any weekday recorded a gap.
    pub fn any_weekday_updates(&self) -> bool {
        self.weekdays.iter().any(|d| d.has_updates)
    }

    /// True while the analysis is younger than `expiry_secs` at `now`.
    /// An analysis stamped after `now` is stale.
    pub fn is_fresh(&self, now: i64, expiry_secs: u64) -> bool {
        crate::models::within_window(self.last_analysis_time, now, expiry_secs)
    }
}

/// Mean of the strictly positive values; `None` when there are none.
fn mean_positive(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values
        .filter(|v| *v > 0.0)
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}
