//! In-memory entry history, for embedding without a database and for tests.

use autottl_core::errors::HistoryError;
use autottl_core::{FeedId, IEntryHistory};
use dashmap::DashMap;

/// Per-feed publication timestamps, kept in ascending order.
#[derive(Debug, Default)]
pub struct MemoryHistory {
    feeds: DashMap<FeedId, Vec<i64>>,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one entry's publication time.
    pub fn record(&self, feed_id: FeedId, timestamp: i64) {
        let mut entries = self.feeds.entry(feed_id).or_default();
        let at = entries.partition_point(|t| *t <= timestamp);
        entries.insert(at, timestamp);
    }

    /// Replace a feed's whole history.
    pub fn replace(&self, feed_id: FeedId, mut timestamps: Vec<i64>) {
        timestamps.sort_unstable();
        self.feeds.insert(feed_id, timestamps);
    }

    /// Forget a feed. Returns whether it had any history.
    pub fn remove_feed(&self, feed_id: FeedId) -> bool {
        self.feeds.remove(&feed_id).is_some()
    }

    /// Drop entries at or before `cutoff` across all feeds.
    /// Returns the number of entries removed.
    pub fn purge_before(&self, cutoff: i64) -> usize {
        let mut removed = 0;
        for mut feed in self.feeds.iter_mut() {
            let keep_from = feed.partition_point(|t| *t <= cutoff);
            removed += keep_from;
            feed.drain(..keep_from);
        }
        removed
    }

    /// Number of entries stored for `feed_id`.
    pub fn len(&self, feed_id: FeedId) -> usize {
        self.feeds.get(&feed_id).map(|f| f.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.feeds.iter().all(|f| f.is_empty())
    }
}

impl IEntryHistory for MemoryHistory {
    fn fetch_recent_timestamps(
        &self,
        feed_id: FeedId,
        cutoff: i64,
    ) -> Result<Vec<i64>, HistoryError> {
        Ok(self
            .feeds
            .get(&feed_id)
            .map(|entries| {
                let start = entries.partition_point(|t| *t <= cutoff);
                entries[start..].to_vec()
            })
            .unwrap_or_default())
    }
}
