use serde::{Deserialize, Serialize};

/// One row of the most-active-hours report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActiveHour {
    /// Hour of day (0–23).
    pub hour: u32,
    /// Average updates per covered day in this hour.
    pub density: f64,
}
