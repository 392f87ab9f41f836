use crate::models::FeedId;

/// Errors raised by a historical entry data source.
#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("history query failed for feed {feed_id}: {message}")]
    QueryFailed { feed_id: FeedId, message: String },

    #[error("history source unavailable: {message}")]
    Unavailable { message: String },
}
