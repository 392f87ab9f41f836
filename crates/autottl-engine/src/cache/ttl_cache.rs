//! Feed → last computed TTL, smoothed against its predecessor on refresh.

use autottl_core::{CachedTtl, FeedId, TtlBounds};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use super::CacheStats;
use crate::smoothing::blend;

/// Short-lived TTL cache with exponential smoothing.
///
/// A stale entry is never served but is kept as the "previous" value for the
/// next blend until it is replaced or invalidated.
pub struct TtlCache {
    entries: DashMap<FeedId, CachedTtl>,
    expiry_secs: u64,
    smoothing_weight: f64,
    stats: CacheStats,
}

impl TtlCache {
    pub fn new(expiry_secs: u64, smoothing_weight: f64) -> Self {
        Self {
            entries: DashMap::new(),
            expiry_secs,
            smoothing_weight,
            stats: CacheStats::default(),
        }
    }

    pub fn expiry_secs(&self) -> u64 {
        self.expiry_secs
    }

    pub fn smoothing_weight(&self) -> f64 {
        self.smoothing_weight
    }

    /// The cached TTL if it was computed less than `expiry_secs` before `now`.
    pub fn get_fresh(&self, feed_id: FeedId, now: i64) -> Option<u64> {
        let fresh = self
            .entries
            .get(&feed_id)
            .filter(|entry| entry.is_fresh(now, self.expiry_secs))
            .map(|entry| entry.ttl_secs);
        match fresh {
            Some(_) => self.stats.record_hit(),
            None => self.stats.record_miss(),
        }
        fresh
    }

    /// Last stored TTL regardless of age.
    pub fn previous(&self, feed_id: FeedId) -> Option<u64> {
        self.entries.get(&feed_id).map(|entry| entry.ttl_secs)
    }

    /// The full cached record, regardless of age.
    pub fn entry(&self, feed_id: FeedId) -> Option<CachedTtl> {
        self.entries.get(&feed_id).map(|entry| *entry)
    }

    /// Blend `raw` with the previous TTL (if any), clamp, store and return.
    ///
    /// The read-blend-write happens under the slot's lock. If another caller
    /// stored a fresh value in the meantime, that value wins and is returned
    /// unchanged.
    pub fn store_smoothed(&self, feed_id: FeedId, raw: u64, now: i64, bounds: &TtlBounds) -> u64 {
        match self.entries.entry(feed_id) {
            Entry::Occupied(mut slot) => {
                let current = *slot.get();
                if current.is_fresh(now, self.expiry_secs) {
                    return current.ttl_secs;
                }
                let ttl = bounds.clamp(blend(current.ttl_secs, raw, self.smoothing_weight));
                tracing::debug!(
                    feed_id = %feed_id,
                    previous = current.ttl_secs,
                    raw,
                    ttl,
                    "smoothed TTL"
                );
                slot.insert(CachedTtl::new(feed_id, ttl, now));
                ttl
            }
            Entry::Vacant(slot) => {
                let ttl = bounds.clamp(raw);
                slot.insert(CachedTtl::new(feed_id, ttl, now));
                ttl
            }
        }
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

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED: FeedId = FeedId(3);

    fn bounds() -> TtlBounds {
        TtlBounds::new(600, 86_400)
    }

    #[test]
    fn first_value_is_only_clamped() {
        let cache = TtlCache::new(300, 0.7);
        assert_eq!(cache.store_smoothed(FEED, 10_000, 0, &bounds()), 10_000);
        assert_eq!(cache.store_smoothed(FeedId(4), 10, 0, &bounds()), 600);
        assert_eq!(cache.store_smoothed(FeedId(5), 500_000, 0, &bounds()), 86_400);
    }

    #[test]
    fn fresh_entry_served_and_not_overwritten() {
        let cache = TtlCache::new(300, 0.7);
        cache.store_smoothed(FEED, 10_000, 0, &bounds());
        assert_eq!(cache.get_fresh(FEED, 299), Some(10_000));
        // A concurrent writer arriving inside the window keeps the stored value.
        assert_eq!(cache.store_smoothed(FEED, 2_000, 100, &bounds()), 10_000);
        assert_eq!(cache.entry(FEED).map(|e| e.computed_at), Some(0));
    }

    #[test]
    fn stale_entry_blended_with_new_raw() {
        let cache = TtlCache::new(300, 0.7);
        cache.store_smoothed(FEED, 10_000, 0, &bounds());
        assert_eq!(cache.get_fresh(FEED, 300), None);
        assert_eq!(cache.previous(FEED), Some(10_000));
        assert_eq!(cache.store_smoothed(FEED, 2_000, 300, &bounds()), 7_600);
        assert_eq!(cache.entry(FEED), Some(CachedTtl::new(FEED, 7_600, 300)));
    }

    #[test]
    fn blend_is_clamped_after_smoothing() {
        let cache = TtlCache::new(300, 0.7);
        let tight = TtlBounds::new(600, 5_000);
        cache.store_smoothed(FEED, 5_000, 0, &tight);
        // 0.7 × 5000 + 0.3 × 20000 = 9500 → 5000
        assert_eq!(cache.store_smoothed(FEED, 20_000, 400, &tight), 5_000);
    }

    #[test]
    fn entry_stamped_after_now_is_recomputed() {
        let cache = TtlCache::new(300, 0.7);
        cache.store_smoothed(FEED, 10_000, 5_000, &bounds());
        assert_eq!(cache.get_fresh(FEED, 4_900), None);
        // Still the smoothing input: 0.7 × 10000 + 0.3 × 2000 = 7600.
        assert_eq!(cache.store_smoothed(FEED, 2_000, 4_900, &bounds()), 7_600);
        assert_eq!(cache.entry(FEED).map(|e| e.computed_at), Some(4_900));
    }

    #[test]
    fn stats_track_lookups() {
        let cache = TtlCache::new(300, 0.7);
        assert_eq!(cache.get_fresh(FEED, 0), None);
        cache.store_smoothed(FEED, 1_000, 0, &bounds());
        assert_eq!(cache.get_fresh(FEED, 1), Some(1_000));
        assert_eq!(cache.stats().hits(), 1);
        assert_eq!(cache.stats().misses(), 1);
    }

    #[test]
    fn invalidate_removes_previous() {
        let cache = TtlCache::new(300, 0.7);
        assert!(!cache.invalidate(FEED));
        cache.store_smoothed(FEED, 1_000, 0, &bounds());
        assert!(cache.invalidate(FEED));
        assert_eq!(cache.previous(FEED), None);
    }
}
