//! Maps an [`UpdatePattern`] and the current time to a raw TTL prediction.
//!
//! ```text
//! raw = baseInterval × hourWeight,   result = max(defaultTTL, raw)
//! ```
//!
//! `baseInterval` comes from the current hour (falling back to the mean of
//! all hours, then the simple average) and is overridden by the current
//! weekday's interval, or the mean over observed weekdays. `hourWeight` is
//! `avgDensity / max(0.1, density[hour])` clamped to `[0.5, 2.0]`.

use autottl_core::constants::{MAX_HOUR_WEIGHT, MIN_DENSITY_DIVISOR, MIN_HOUR_WEIGHT};
use autottl_core::{Prediction, TtlBounds, UpdatePattern};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::bucket::bucket;

/// Where the base interval of a prediction came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaseSource {
    /// Not enough history; simple average or max TTL.
    Insufficient,
    CurrentHour,
    MeanOfHours,
    SimpleAverage,
    CurrentWeekday,
    MeanOfWeekdays,
}

/// Every intermediate value of one prediction, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionBreakdown {
    /// Local hour of "now", if representable.
    pub hour: Option<u32>,
    /// Local weekday of "now" (0 = Sunday), if representable.
    pub weekday: Option<u32>,
    pub base_source: BaseSource,
    pub base_interval: f64,
    pub hour_weight: f64,
    /// `base_interval × hour_weight`, before the floor.
    pub raw: f64,
    pub prediction: Prediction,
}

/// TTL predictor bound to an administrator floor and a timezone.
#[derive(Debug, Clone)]
pub struct TtlPredictor {
    bounds: TtlBounds,
    timezone: Tz,
}

impl TtlPredictor {
    pub fn new(bounds: TtlBounds, timezone: Tz) -> Self {
        Self { bounds, timezone }
    }

    /// Predict the raw TTL for `pattern` at unix time `now`.
    pub fn predict(&self, pattern: &UpdatePattern, now: i64) -> Prediction {
        self.explain(pattern, now).prediction
    }

    /// Predict with a full breakdown of each step.
    pub fn explain(&self, pattern: &UpdatePattern, now: i64) -> PredictionBreakdown {
        if !pattern.has_enough_data {
            let prediction = if pattern.simple_avg_interval > 0.0 {
                Prediction::Interval(pattern.simple_avg_interval as u64)
            } else {
                Prediction::UseMax
            };
            return PredictionBreakdown {
                hour: None,
                weekday: None,
                base_source: BaseSource::Insufficient,
                base_interval: pattern.simple_avg_interval,
                hour_weight: 1.0,
                raw: pattern.simple_avg_interval,
                prediction,
            };
        }

        let slot = bucket(now, &self.timezone);
        let hour = slot.map(|s| s.hour);
        let weekday = slot.map(|s| s.weekday);

        let (mut base_interval, mut base_source) = hour_base(pattern, hour);

        // Weekday override.
        let current_day = weekday.and_then(|d| pattern.weekday(d)).filter(|d| d.is_usable());
        if let Some(day) = current_day {
            base_interval = day.interval;
            base_source = BaseSource::CurrentWeekday;
        } else if pattern.any_weekday_updates() {
            if let Some(mean) = pattern.mean_weekday_interval() {
                base_interval = mean;
                base_source = BaseSource::MeanOfWeekdays;
            }
        }

        let hour_weight = hour_weight(pattern, hour);
        let raw = base_interval * hour_weight;
        let floored = raw.max(self.bounds.default_ttl as f64);

        PredictionBreakdown {
            hour,
            weekday,
            base_source,
            base_interval,
            hour_weight,
            raw,
            prediction: Prediction::Interval(floored as u64),
        }
    }
}

/// Current hour's interval, else the mean over hours, else the simple average.
fn hour_base(pattern: &UpdatePattern, hour: Option<u32>) -> (f64, BaseSource) {
    if let Some(interval) = hour
        .and_then(|h| pattern.hour_interval(h))
        .filter(|i| *i > 0.0)
    {
        return (interval, BaseSource::CurrentHour);
    }
    match pattern.mean_hour_interval() {
        Some(mean) => (mean, BaseSource::MeanOfHours),
        None => (pattern.simple_avg_interval, BaseSource::SimpleAverage),
    }
}

/// Dense hours shrink the TTL toward 0.5×, sparse hours stretch it toward 2×.
fn hour_weight(pattern: &UpdatePattern, hour: Option<u32>) -> f64 {
    let density = hour
        .and_then(|h| pattern.hour_density(h))
        .filter(|d| *d > 0.0);
    match (density, pattern.mean_hour_density()) {
        (Some(density), Some(avg)) if avg > 0.0 => {
            (avg / density.max(MIN_DENSITY_DIVISOR)).clamp(MIN_HOUR_WEIGHT, MAX_HOUR_WEIGHT)
        }
        _ => 1.0,
    }
}
