use std::sync::Arc;

use crate::errors::HistoryError;
use crate::models::FeedId;

/// Read-only source of a feed's historical entry timestamps.
///
/// Implementations return unix timestamps strictly after `cutoff`, in
/// ascending order. The engine does not re-sort. This is the only call in
/// the engine that may block.
pub trait IEntryHistory: Send + Sync {
    fn fetch_recent_timestamps(&self, feed_id: FeedId, cutoff: i64)
        -> Result<Vec<i64>, HistoryError>;
}

impl<T: IEntryHistory + ?Sized> IEntryHistory for Arc<T> {
    fn fetch_recent_timestamps(
        &self,
        feed_id: FeedId,
        cutoff: i64,
    ) -> Result<Vec<i64>, HistoryError> {
        (**self).fetch_recent_timestamps(feed_id, cutoff)
    }
}

impl<T: IEntryHistory + ?Sized> IEntryHistory for &T {
    fn fetch_recent_timestamps(
        &self,
        feed_id: FeedId,
        cutoff: i64,
    ) -> Result<Vec<i64>, HistoryError> {
        (**self).fetch_recent_timestamps(feed_id, cutoff)
    }
}
