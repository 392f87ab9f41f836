use serde::{Deserialize, Serialize};

use super::FeedId;

/// A computed TTL held in the TTL cache. One live entry per feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedTtl {
    pub feed_id: FeedId,
    /// Final, clamped TTL in seconds.
    pub ttl_secs: u64,
    /// Unix timestamp at which the value was computed.
    pub computed_at: i64,
}

impl CachedTtl {
    pub fn new(feed_id: FeedId, ttl_secs: u64, computed_at: i64) -> Self {
        Self {
            feed_id,
            ttl_secs,
            computed_at,
        }
    }

    /// True while `now` is inside the freshness window.
    /// A value computed after `now` is stale.
    pub fn is_fresh(&self, now: i64, expiry_secs: u64) -> bool {
        super::within_window(self.computed_at, now, expiry_secs)
    }
}
