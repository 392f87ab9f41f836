//! Configuration for the adaptive TTL engine.
//! TOML-based, layered: host overrides > env > config file > defaults.

pub mod analysis_config;
pub mod autottl_config;
pub mod cache_config;
pub mod defaults;

pub use analysis_config::AnalysisConfig;
pub use autottl_config::{AutoTtlConfig, ConfigOverrides};
pub use cache_config::CacheConfig;
