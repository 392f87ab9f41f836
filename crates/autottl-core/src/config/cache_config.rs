use serde::{Deserialize, Serialize};

use super::defaults;

/// Expiry windows for the two in-process caches and the smoothing weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Pattern cache freshness window (seconds).
    pub pattern_expiry_secs: u64,
    /// TTL cache freshness window (seconds). Shorter than the pattern window.
    pub ttl_expiry_secs: u64,
    /// Weight of the previous TTL when blending with a new prediction.
    pub smoothing_weight: f64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            pattern_expiry_secs: defaults::DEFAULT_PATTERN_EXPIRY_SECS,
            ttl_expiry_secs: defaults::DEFAULT_TTL_EXPIRY_SECS,
            smoothing_weight: defaults::DEFAULT_SMOOTHING_WEIGHT,
        }
    }
}
