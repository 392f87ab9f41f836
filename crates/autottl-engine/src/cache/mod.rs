//! In-process caches owned by the engine.
//!
//! Both are keyed by feed and backed by `DashMap`, so every slot is replaced
//! atomically and different feeds never contend on a shared lock. Nothing is
//! persisted across restarts.

mod pattern_cache;
mod stats;
mod ttl_cache;

pub use pattern_cache::PatternCache;
pub use stats::CacheStats;
pub use ttl_cache::TtlCache;
