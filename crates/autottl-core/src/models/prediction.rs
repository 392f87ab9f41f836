use serde::{Deserialize, Serialize};

use crate::bounds::TtlBounds;

/// Raw outcome of the TTL predictor, before smoothing and clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "secs", rename_all = "snake_case")]
pub enum Prediction {
    /// A predicted interval in whole seconds.
    Interval(u64),
    /// No usable signal; poll at the administrator maximum.
    UseMax,
}

impl Prediction {
    /// Resolve to seconds against the configured bounds.
    pub fn resolve(self, bounds: &TtlBounds) -> u64 {
        match self {
            Self::Interval(secs) => secs,
            Self::UseMax => bounds.max_ttl,
        }
    }
}
