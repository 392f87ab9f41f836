//! # autottl-engine
//!
//! Adaptive refresh intervals for polled feeds.
//!
//! ```text
//! dynamic_ttl(feed)
//!   → TTL cache (5 min) ── fresh ──────────────────────────────→ return
//!   → pattern cache (1 h) ── stale → history source → analyzer
//!   → predictor → blend with previous TTL (0.7 / 0.3) → clamp → store → return
//! ```
//!
//! Both caches are owned by the [`AutoTtlEngine`] instance, keyed by feed,
//! and updated slot-by-slot without a global lock.

pub mod cache;
pub mod engine;
pub mod history;
pub mod smoothing;
pub mod tracing_setup;

pub use cache::{CacheStats, PatternCache, TtlCache};
pub use engine::AutoTtlEngine;
pub use history::MemoryHistory;
