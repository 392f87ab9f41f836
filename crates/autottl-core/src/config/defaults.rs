// Single source of truth for all default values.

// --- Bounds ---
pub const DEFAULT_TTL_SECS: u64 = 3_600; // 1 hour
pub const DEFAULT_MAX_TTL_SECS: u64 = 86_400; // 1 day

// --- History ---
pub const DEFAULT_LOOKBACK_DAYS: u32 = 30;

// --- Analysis ---
pub const DEFAULT_MIN_ENTRIES: usize = 10;
pub const DEFAULT_SUFFICIENT_ENTRIES: usize = 30;
pub const DEFAULT_SUFFICIENT_DAYS: usize = 7;

// --- Caches ---
pub const DEFAULT_PATTERN_EXPIRY_SECS: u64 = 3_600; // 1 hour
pub const DEFAULT_TTL_EXPIRY_SECS: u64 = 300; // 5 minutes
pub const DEFAULT_SMOOTHING_WEIGHT: f64 = 0.7;

// --- Observability ---
pub const DEFAULT_LOG_FILTER: &str = "autottl=info";
