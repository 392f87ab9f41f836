//! AutoTtlEngine: cached, smoothed, bounded TTLs per feed.

use std::sync::Arc;

use autottl_core::errors::AutoTtlResult;
use autottl_core::traits::{resolve_timezone, NamedTimezone};
use autottl_core::{
    ActiveHour, AutoTtlConfig, FeedId, IEntryHistory, ITimezoneProvider, TtlBounds, UpdatePattern,
};
use autottl_pattern::{most_active_hours, PatternAnalyzer, PredictionBreakdown, TtlPredictor};
use chrono::Utc;
use chrono_tz::Tz;

use crate::cache::{PatternCache, TtlCache};
use crate::{autottl_analysis_span, autottl_ttl_span};

/// Adaptive TTL engine over a history source `H`.
///
/// Owns both caches; share one instance per process (e.g. behind an `Arc`)
/// so every caller sees the same cached state.
pub struct AutoTtlEngine<H: IEntryHistory> {
    history: H,
    config: AutoTtlConfig,
    timezone: Tz,
    analyzer: PatternAnalyzer,
    predictor: TtlPredictor,
    patterns: PatternCache,
    ttls: TtlCache,
}

impl<H: IEntryHistory> AutoTtlEngine<H> {
    /// Create an engine bucketing in `config.timezone` (UTC when absent or unknown).
    pub fn new(history: H, config: AutoTtlConfig) -> AutoTtlResult<Self> {
        let timezone = match config.timezone.clone() {
            Some(name) => resolve_timezone(&NamedTimezone(name)),
            None => Tz::UTC,
        };
        Self::build(history, config, timezone)
    }

    /// Create an engine whose timezone comes from the host's provider.
    pub fn with_timezone_provider(
        history: H,
        config: AutoTtlConfig,
        provider: &dyn ITimezoneProvider,
    ) -> AutoTtlResult<Self> {
        Self::build(history, config, resolve_timezone(provider))
    }

    fn build(history: H, config: AutoTtlConfig, timezone: Tz) -> AutoTtlResult<Self> {
        config.validate()?;
        if !config.bounds.is_consistent() {
            tracing::warn!(
                default_ttl = config.bounds.default_ttl,
                max_ttl = config.bounds.max_ttl,
                "default TTL exceeds max TTL; every feed will use the default TTL"
            );
        }
        Ok(Self {
            history,
            analyzer: PatternAnalyzer::new(config.analysis, timezone),
            predictor: TtlPredictor::new(config.bounds, timezone),
            patterns: PatternCache::new(config.cache.pattern_expiry_secs),
            ttls: TtlCache::new(config.cache.ttl_expiry_secs, config.cache.smoothing_weight),
            timezone,
            config,
        })
    }

    pub fn bounds(&self) -> TtlBounds {
        self.config.bounds
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    pub fn config(&self) -> &AutoTtlConfig {
        &self.config
    }

    pub fn pattern_cache(&self) -> &PatternCache {
        &self.patterns
    }

    pub fn ttl_cache(&self) -> &TtlCache {
        &self.ttls
    }

    /// TTL for `feed_id` right now. Never fails.
    ///
    /// A data-source failure falls back to the feed's previous TTL, or the
    /// clamped maximum when there is none.
    pub fn adjusted_ttl(&self, feed_id: FeedId) -> u64 {
        match self.dynamic_ttl(feed_id, None) {
            Ok(ttl) => ttl,
            Err(err) => {
                let bounds = self.bounds();
                let fallback = self
                    .ttls
                    .previous(feed_id)
                    .unwrap_or_else(|| bounds.clamp(bounds.max_ttl));
                tracing::warn!(
                    feed_id = %feed_id,
                    error = %err,
                    fallback,
                    "TTL computation failed, using fallback"
                );
                fallback
            }
        }
    }

    /// TTL for `feed_id` at `now` (unix seconds; the wall clock when `None`).
    pub fn dynamic_ttl(&self, feed_id: FeedId, now: Option<i64>) -> AutoTtlResult<u64> {
        let now = now.unwrap_or_else(current_time);
        let span = autottl_ttl_span!(feed_id, now);
        let _guard = span.enter();

        if let Some(ttl) = self.ttls.get_fresh(feed_id, now) {
            tracing::debug!(feed_id = %feed_id, ttl, "TTL cache hit");
            return Ok(ttl);
        }

        let pattern = self.pattern_at(feed_id, now)?;
        let raw = self.predictor.predict(&pattern, now).resolve(&self.config.bounds);
        let ttl = self.ttls.store_smoothed(feed_id, raw, now, &self.config.bounds);
        tracing::debug!(feed_id = %feed_id, raw, ttl, "TTL recomputed");
        Ok(ttl)
    }

    /// The feed's update pattern, cached or freshly analyzed.
    pub fn analyze_feed_pattern(&self, feed_id: FeedId) -> AutoTtlResult<Arc<UpdatePattern>> {
        self.pattern_at(feed_id, current_time())
    }

    /// [`Self::analyze_feed_pattern`] with an explicit clock.
    pub fn analyze_feed_pattern_at(
        &self,
        feed_id: FeedId,
        now: i64,
    ) -> AutoTtlResult<Arc<UpdatePattern>> {
        self.pattern_at(feed_id, now)
    }

    /// Every intermediate step of the raw prediction at `now`.
    /// Reads through the pattern cache, leaves the TTL cache untouched.
    pub fn explain_ttl(
        &self,
        feed_id: FeedId,
        now: Option<i64>,
    ) -> AutoTtlResult<PredictionBreakdown> {
        let now = now.unwrap_or_else(current_time);
        let pattern = self.pattern_at(feed_id, now)?;
        Ok(self.predictor.explain(&pattern, now))
    }

    /// Up to three busiest hours of `pattern`, densest first.
    pub fn most_active_hours(&self, pattern: &UpdatePattern) -> Vec<ActiveHour> {
        most_active_hours(pattern)
    }

    /// Normalize a feed-level fixed TTL through the same bounds.
    pub fn static_ttl(&self, ttl: u64) -> u64 {
        self.config.bounds.clamp(ttl)
    }

    /// Forget the feed's pattern and TTL. Safe for unknown feeds.
    pub fn clear_cache(&self, feed_id: FeedId) {
        let had_pattern = self.patterns.invalidate(feed_id);
        let had_ttl = self.ttls.invalidate(feed_id);
        tracing::debug!(feed_id = %feed_id, had_pattern, had_ttl, "cache cleared");
    }

    /// Forget every cached pattern and TTL.
    pub fn clear_all(&self) {
        self.patterns.invalidate_all();
        self.ttls.invalidate_all();
        tracing::debug!("all caches cleared");
    }

    fn pattern_at(&self, feed_id: FeedId, now: i64) -> AutoTtlResult<Arc<UpdatePattern>> {
        self.patterns
            .get_or_refresh(feed_id, now, || self.analyze_from_history(feed_id, now))
    }

    fn analyze_from_history(&self, feed_id: FeedId, now: i64) -> AutoTtlResult<UpdatePattern> {
        let cutoff = self.config.history_cutoff(now);
        let timestamps = self.history.fetch_recent_timestamps(feed_id, cutoff)?;

        let span = autottl_analysis_span!(feed_id, timestamps.len());
        let _guard = span.enter();

        let pattern = self.analyzer.analyze(&timestamps, now);
        tracing::info!(
            feed_id = %feed_id,
            entries = pattern.total_entries,
            days = pattern.days_covered,
            enough_data = pattern.has_enough_data,
            "pattern analyzed"
        );
        Ok(pattern)
    }
}

fn current_time() -> i64 {
    Utc::now().timestamp()
}
