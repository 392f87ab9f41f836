/// Number of weekday buckets (0 = Sunday .. 6 = Saturday).
pub const DAYS_PER_WEEK: usize = 7;

/// Seconds in one day.
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Lower bound on an hour's density when used as a weighting divisor.
pub const MIN_DENSITY_DIVISOR: f64 = 0.1;

/// Clamp range for the hour-density weight.
pub const MIN_HOUR_WEIGHT: f64 = 0.5;
pub const MAX_HOUR_WEIGHT: f64 = 2.0;

/// Maximum number of entries returned by the active-hours report.
pub const MAX_ACTIVE_HOURS: usize = 3;
