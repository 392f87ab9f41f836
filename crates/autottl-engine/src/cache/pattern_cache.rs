//! Feed → update pattern, refreshed when older than the expiry window.

use std::sync::Arc;

use autottl_core::{FeedId, UpdatePattern};
use dashmap::DashMap;

use super::CacheStats;

/// Pattern cache with a fixed freshness window.
///
/// Unbounded in feed count; entries leave only through invalidation.
/// Concurrent misses on the same feed may both recompute; the last writer
/// wins and either result is a complete snapshot.
pub struct PatternCache {
    entries: DashMap<FeedId, Arc<UpdatePattern>>,
    expiry_secs: u64,
    stats: CacheStats,
}

impl PatternCache {
    pub fn new(expiry_secs: u64) -> Self {
        Self {
            entries: DashMap::new(),
            expiry_secs,
            stats: CacheStats::default(),
        }
    }

    pub fn expiry_secs(&self) -> u64 {
        self.expiry_secs
    }

    /// The cached pattern if it is still fresh at `now`.
    pub fn get_fresh(&self, feed_id: FeedId, now: i64) -> Option<Arc<UpdatePattern>> {
        let cached = self
            .entries
            .get(&feed_id)
            .map(|entry| Arc::clone(entry.value()))
            .filter(|p| p.is_fresh(now, self.expiry_secs));
        match cached {
            Some(p) => {
                self.stats.record_hit();
                Some(p)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    /// Return the fresh pattern, or run `compute` and cache its result.
    ///
    /// `compute` runs without holding the slot lock. On error nothing is
    /// cached and the stale entry, if any, stays in place.
    pub fn get_or_refresh<E>(
        &self,
        feed_id: FeedId,
        now: i64,
        compute: impl FnOnce() -> Result<UpdatePattern, E>,
    ) -> Result<Arc<UpdatePattern>, E> {
        if let Some(p) = self.get_fresh(feed_id, now) {
            return Ok(p);
        }
        Ok(self.insert(feed_id, compute()?))
    }

    /// Replace the feed's pattern wholesale.
    pub fn insert(&self, feed_id: FeedId, pattern: UpdatePattern) -> Arc<UpdatePattern> {
        let pattern = Arc::new(pattern);
        self.entries.insert(feed_id, Arc::clone(&pattern));
        pattern
    }

    /// Drop the feed's entry. Returns whether one existed.
    pub fn invalidate(&self, feed_id: FeedId) -> bool {
        self.entries.remove(&feed_id).is_some()
    }

    pub fn invalidate_all(&self) {
        self.entries.clear();
    }

    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Number of feeds currently cached, fresh or not.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED: FeedId = FeedId(7);

    #[test]
    fn miss_then_hit() {
        let cache = PatternCache::new(3600);
        assert!(cache.get_fresh(FEED, 1_000).is_none());

        cache.insert(FEED, UpdatePattern::empty(1_000));
        assert!(cache.get_fresh(FEED, 1_000).is_some());
        assert!(cache.get_fresh(FEED, 4_599).is_some());
        assert_eq!(cache.stats().hits(), 2);
        assert_eq!(cache.stats().misses(), 1);
    }

    #[test]
    fn expires_after_window() {
        let cache = PatternCache::new(3600);
        cache.insert(FEED, UpdatePattern::empty(1_000));
        assert!(cache.get_fresh(FEED, 4_600).is_none());
        // Stale entries stay until replaced or invalidated.
        assert_eq!(cache.entry_count(), 1);
    }

    #[test]
    fn refresh_only_when_stale() {
        let cache = PatternCache::new(3600);
        let mut computed = 0;

        let first = cache
            .get_or_refresh::<()>(FEED, 0, || {
                computed += 1;
                Ok(UpdatePattern::empty(0))
            })
            .unwrap();
        let second = cache
            .get_or_refresh::<()>(FEED, 10, || {
                computed += 1;
                Ok(UpdatePattern::empty(10))
            })
            .unwrap();
        assert_eq!(computed, 1);
        assert!(Arc::ptr_eq(&first, &second));

        let third = cache
            .get_or_refresh::<()>(FEED, 3_600, || {
                computed += 1;
                Ok(UpdatePattern::empty(3_600))
            })
            .unwrap();
        assert_eq!(computed, 2);
        assert_eq!(third.last_analysis_time, 3_600);
    }

    #[test]
    fn failed_refresh_keeps_stale_entry() {
        let cache = PatternCache::new(3600);
        cache.insert(FEED, UpdatePattern::empty(0));
        let result = cache.get_or_refresh(FEED, 10_000, || Err("boom"));
        assert_eq!(result.unwrap_err(), "boom");
        assert_eq!(cache.entry_count(), 1);
    }

    #[test]
    fn entry_stamped_after_now_is_a_miss() {
        let cache = PatternCache::new(3600);
        cache.insert(FEED, UpdatePattern::empty(5_000));
        assert!(cache.get_fresh(FEED, 4_999).is_none());

        let refreshed = cache
            .get_or_refresh::<()>(FEED, 1_000, || Ok(UpdatePattern::empty(1_000)))
            .unwrap();
        assert_eq!(refreshed.last_analysis_time, 1_000);
    }

    #[test]
    fn invalidate_is_safe_without_entry() {
        let cache = PatternCache::new(3600);
        assert!(!cache.invalidate(FEED));
        cache.insert(FEED, UpdatePattern::empty(0));
        assert!(cache.invalidate(FEED));
        assert_eq!(cache.entry_count(), 0);
    }
}
