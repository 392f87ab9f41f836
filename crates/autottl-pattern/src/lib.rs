//! # autottl-pattern
//!
//! Pure computation behind adaptive feed TTLs. No shared state, no I/O.
//!
//! | Component | Role |
//! |-----------|------|
//! | [`bucket`] | timestamp + timezone → hour, weekday (0 = Sunday), calendar date |
//! | [`PatternAnalyzer`] | ascending timestamps → [`UpdatePattern`](autottl_core::UpdatePattern) |
//! | [`TtlPredictor`] | pattern + "now" → raw [`Prediction`](autottl_core::Prediction) |
//! | [`most_active_hours`] | top-3 hours by density, for display |

pub mod analyzer;
pub mod bucket;
pub mod predictor;
pub mod report;

pub use analyzer::PatternAnalyzer;
pub use bucket::{bucket, TimeBucket};
pub use predictor::{BaseSource, PredictionBreakdown, TtlPredictor};
pub use report::most_active_hours;
