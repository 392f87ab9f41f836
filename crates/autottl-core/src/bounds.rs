use serde::{Deserialize, Serialize};

use crate::config::defaults;

/// Administrator-defined TTL bounds, in seconds.
///
/// The single bounds policy: every computed TTL and every feed-level static
/// TTL goes through [`TtlBounds::clamp`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TtlBounds {
    /// Floor applied to predictions.
    pub default_ttl: u64,
    /// Ceiling; also the fallback when nothing better is known.
    pub max_ttl: u64,
}

impl TtlBounds {
    pub fn new(default_ttl: u64, max_ttl: u64) -> Self {
        Self {
            default_ttl,
            max_ttl,
        }
    }

    /// False when `default_ttl > max_ttl`.
    pub fn is_consistent(&self) -> bool {
        self.default_ttl <= self.max_ttl
    }

    /// Force `value` into `[default_ttl, max_ttl]`.
    ///
    /// Zero means "unknown" and maps to the ceiling. With inconsistent bounds
    /// the result is always `default_ttl`.
    pub fn clamp(&self, value: u64) -> u64 {
        if !self.is_consistent() {
            return self.default_ttl;
        }
        if value == 0 || value > self.max_ttl {
            self.max_ttl
        } else if value < self.default_ttl {
            self.default_ttl
        } else {
            value
        }
    }
}

impl Default for TtlBounds {
    fn default() -> Self {
        Self {
            default_ttl: defaults::DEFAULT_TTL_SECS,
            max_ttl: defaults::DEFAULT_MAX_TTL_SECS,
        }
    }
}
