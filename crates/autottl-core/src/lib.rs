//! # autottl-core
//!
//! Foundation crate for the adaptive feed TTL engine.
//! Defines the shared types, traits, errors, config, and the bounds policy.
//! Every other crate in the workspace depends on this.

pub mod bounds;
pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use bounds::TtlBounds;
pub use config::AutoTtlConfig;
pub use errors::{AutoTtlError, AutoTtlResult};
pub use models::{ActiveHour, CachedTtl, FeedId, HourProfile, Prediction, UpdatePattern, WeekdayProfile};
pub use traits::{IEntryHistory, ITimezoneProvider};
