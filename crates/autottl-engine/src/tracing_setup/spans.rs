//! Span definitions per operation: TTL computation and pattern analysis.

/// Create a TTL computation span.
#[macro_export]
macro_rules! autottl_ttl_span {
    ($feed_id:expr, $now:expr) => {
        tracing::debug_span!("autottl.ttl", feed_id = %$feed_id, now = $now)
    };
}

/// Create a pattern analysis span.
#[macro_export]
macro_rules! autottl_analysis_span {
    ($feed_id:expr, $entries:expr) => {
        tracing::info_span!("autottl.analysis", feed_id = %$feed_id, entries = $entries)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const TTL: &str = "autottl.ttl";
    pub const ANALYSIS: &str = "autottl.analysis";
}

#[cfg(test)]
mod tests {
    use autottl_core::FeedId;

    #[test]
    fn span_names_match_macros() {
        let ttl = crate::autottl_ttl_span!(FeedId(1), 0_i64);
        let analysis = crate::autottl_analysis_span!(FeedId(1), 12_usize);
        // Disabled spans carry no metadata when no subscriber is installed.
        if let Some(meta) = ttl.metadata() {
            assert_eq!(meta.name(), super::names::TTL);
        }
        if let Some(meta) = analysis.metadata() {
            assert_eq!(meta.name(), super::names::ANALYSIS);
        }
    }
}
