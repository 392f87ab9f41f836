//! Shared test support for the autottl workspace.
//!
//! Golden feed histories (JSON under `feeds/`) with their expected analysis
//! results, deterministic timestamp builders, and mock history sources.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use autottl_core::errors::HistoryError;
use autottl_core::{FeedId, IEntryHistory};
use chrono::{TimeZone, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Root directory of the fixture files.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("feeds")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// List all feed fixture files, sorted by name.
pub fn list_feed_fixtures() -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = std::fs::read_dir(fixtures_root())
        .map(|entries| {
            entries
                .filter_map(|e| e.ok())
                .map(|e| e.path())
                .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
                .collect()
        })
        .unwrap_or_default();
    files.sort();
    files
}

// ── Golden feeds ─────────────────────────────────────────────────────────

/// A recorded feed history with its expected analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedFixture {
    pub name: String,
    pub description: String,
    /// IANA timezone the expectations were computed in.
    pub timezone: String,
    /// Ascending unix timestamps.
    pub timestamps: Vec<i64>,
    pub expected: FeedExpectation,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedExpectation {
    pub total_entries: usize,
    pub days_covered: usize,
    pub has_enough_data: bool,
    pub simple_avg_interval: f64,
    pub most_active_hours: Vec<u32>,
    pub default_ttl: u64,
    pub max_ttl: u64,
    /// TTLs expected from a cold engine at the given instants.
    pub probes: Vec<TtlProbe>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TtlProbe {
    pub at: i64,
    pub first_ttl: u64,
}

/// Load `feeds/<name>.json`.
pub fn load_feed(name: &str) -> FeedFixture {
    load_fixture(&format!("{name}.json"))
}

/// All golden feeds.
pub fn all_feeds() -> Vec<FeedFixture> {
    list_feed_fixtures()
        .iter()
        .filter_map(|p| p.file_name().and_then(|n| n.to_str()).map(str::to_owned))
        .map(|name| load_fixture(&name))
        .collect()
}

// ── Series builders ──────────────────────────────────────────────────────

/// Unix timestamp for a UTC calendar instant.
///
/// # Panics
/// Panics on an invalid date.
pub fn utc(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> i64 {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_else(|| panic!("invalid date {year}-{month}-{day} {hour}:{minute}"))
        .timestamp()
}

/// `count` timestamps starting at `start`, `step` seconds apart.
pub fn evenly_spaced(start: i64, step: i64, count: usize) -> Vec<i64> {
    (0..count as i64).map(|i| start + i * step).collect()
}

/// One entry per day at `start`'s time of day, for `days` days.
pub fn daily(start: i64, days: usize) -> Vec<i64> {
    evenly_spaced(start, 86_400, days)
}

/// `per_day` entries `spacing` seconds apart, starting at `first` on each of `days` days.
pub fn bursts(first: i64, days: usize, per_day: usize, spacing: i64) -> Vec<i64> {
    (0..days as i64)
        .flat_map(|d| (0..per_day as i64).map(move |k| first + d * 86_400 + k * spacing))
        .collect()
}

// ── Mock history sources ─────────────────────────────────────────────────

/// In-memory history that counts how often it is queried.
#[derive(Debug, Default)]
pub struct CountingHistory {
    feeds: Mutex<HashMap<FeedId, Vec<i64>>>,
    calls: AtomicUsize,
}

impl CountingHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_feed(self, feed_id: FeedId, timestamps: Vec<i64>) -> Self {
        self.set_feed(feed_id, timestamps);
        self
    }

    /// Replace a feed's history.
    pub fn set_feed(&self, feed_id: FeedId, timestamps: Vec<i64>) {
        self.feeds.lock().unwrap().insert(feed_id, timestamps);
    }

    /// Number of `fetch_recent_timestamps` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl IEntryHistory for CountingHistory {
    fn fetch_recent_timestamps(
        &self,
        feed_id: FeedId,
        cutoff: i64,
    ) -> Result<Vec<i64>, HistoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .feeds
            .lock()
            .unwrap()
            .get(&feed_id)
            .map(|ts| ts.iter().copied().filter(|t| *t > cutoff).collect())
            .unwrap_or_default())
    }
}

/// History source that always fails.
#[derive(Debug, Default)]
pub struct FailingHistory;

impl IEntryHistory for FailingHistory {
    fn fetch_recent_timestamps(
        &self,
        feed_id: FeedId,
        _cutoff: i64,
    ) -> Result<Vec<i64>, HistoryError> {
        Err(HistoryError::QueryFailed {
            feed_id,
            message: "database is locked".to_string(),
        })
    }
}
