mod active_hour;
mod cached_ttl;
mod feed_id;
mod prediction;
mod update_pattern;

pub use active_hour::ActiveHour;
pub use cached_ttl::CachedTtl;
pub use feed_id::FeedId;
pub use prediction::Prediction;
pub use update_pattern::{HourProfile, UpdatePattern, WeekdayProfile};

/// `now - stamped_at` lies in `[0, expiry_secs)`.
pub(crate) fn within_window(stamped_at: i64, now: i64, expiry_secs: u64) -> bool {
    let expiry = i64::try_from(expiry_secs).unwrap_or(i64::MAX);
    now >= stamped_at && now.saturating_sub(stamped_at) < expiry
}
