//! Builds an [`UpdatePattern`] from a feed's ascending entry timestamps.
//!
//! Each entry counts once toward its hour's density and the distinct-day set.
//! The gap to the next entry is attributed to the earlier entry's hour and
//! weekday; non-positive gaps (duplicates, clock skew) are dropped from the
//! interval means only.

use std::collections::{BTreeMap, HashSet};

use autottl_core::config::AnalysisConfig;
use autottl_core::constants::DAYS_PER_WEEK;
use autottl_core::{HourProfile, UpdatePattern, WeekdayProfile};
use chrono_tz::Tz;

use crate::bucket::bucket;

/// Running sum of positive gaps.
#[derive(Debug, Clone, Copy, Default)]
struct GapStats {
    sum: f64,
    count: usize,
}

impl GapStats {
    fn record(&mut self, gap: i64) {
        self.sum += gap as f64;
        self.count += 1;
    }

    fn mean(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum / self.count as f64
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct HourStats {
    entries: usize,
    gaps: GapStats,
}

/// Stateless analyzer; one call produces one immutable snapshot.
#[derive(Debug, Clone)]
pub struct PatternAnalyzer {
    config: AnalysisConfig,
    timezone: Tz,
}

impl PatternAnalyzer {
    pub fn new(config: AnalysisConfig, timezone: Tz) -> Self {
        Self { config, timezone }
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    /// Analyze `timestamps` (ascending unix seconds), stamping the result
    /// with `analyzed_at`.
    pub fn analyze(&self, timestamps: &[i64], analyzed_at: i64) -> UpdatePattern {
        let mut pattern = UpdatePattern::empty(analyzed_at);
        let n = timestamps.len();
        pattern.total_entries = n;
        pattern.simple_avg_interval = simple_average(timestamps);

        if n < self.config.min_entries {
            return pattern;
        }

        let mut hours: BTreeMap<u32, HourStats> = BTreeMap::new();
        let mut weekdays = [GapStats::default(); DAYS_PER_WEEK];
        let mut dates = HashSet::new();

        for (i, &ts) in timestamps.iter().enumerate() {
            let Some(slot) = bucket(ts, &self.timezone) else {
                continue;
            };
            dates.insert(slot.date);

            let stats = hours.entry(slot.hour).or_default();
            stats.entries += 1;

            let gap = timestamps
                .get(i + 1)
                .and_then(|next| next.checked_sub(ts))
                .filter(|gap| *gap > 0);
            if let Some(gap) = gap {
                stats.gaps.record(gap);
                weekdays[slot.weekday as usize].record(gap);
            }
        }

        pattern.days_covered = dates.len();
        pattern.has_enough_data = n >= self.config.sufficient_entries
            && pattern.days_covered >= self.config.sufficient_days;

        let days = pattern.days_covered.max(1) as f64;
        pattern.hours = hours
            .into_iter()
            .map(|(hour, stats)| {
                let profile = HourProfile {
                    density: stats.entries as f64 / days,
                    interval: stats.gaps.mean(),
                };
                (hour, profile)
            })
            .collect();

        for (profile, stats) in pattern.weekdays.iter_mut().zip(weekdays.iter()) {
            *profile = WeekdayProfile {
                interval: stats.mean(),
                has_updates: stats.count > 0,
            };
        }

        pattern
    }
}

/// (last − first) / (n − 1), or 0 with fewer than two entries.
fn simple_average(timestamps: &[i64]) -> f64 {
    match (timestamps.first(), timestamps.last()) {
        (Some(&first), Some(&last)) if timestamps.len() > 1 => {
            (last as f64 - first as f64) / (timestamps.len() - 1) as f64
        }
        _ => 0.0,
    }
}
