use serde::{Deserialize, Serialize};

use super::defaults;

/// Data-sufficiency thresholds for the pattern analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Below this many entries only the simple average is computed.
    pub min_entries: usize,
    /// Entries required for a full analysis.
    pub sufficient_entries: usize,
    /// Distinct calendar days required for a full analysis.
    pub sufficient_days: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_entries: defaults::DEFAULT_MIN_ENTRIES,
            sufficient_entries: defaults::DEFAULT_SUFFICIENT_ENTRIES,
            sufficient_days: defaults::DEFAULT_SUFFICIENT_DAYS,
        }
    }
}
