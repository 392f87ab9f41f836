//! Top-level engine configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{defaults, AnalysisConfig, CacheConfig};
use crate::bounds::TtlBounds;
use crate::constants::SECONDS_PER_DAY;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Host overrides (applied via `apply_overrides`)
/// 2. Environment variables (`AUTOTTL_*`)
/// 3. Config file (TOML)
/// 4. Compiled defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoTtlConfig {
    /// IANA timezone name used to bucket timestamps. `None` means UTC.
    pub timezone: Option<String>,
    /// How far back the data source is asked for history.
    pub lookback_days: u32,
    pub bounds: TtlBounds,
    pub analysis: AnalysisConfig,
    pub cache: CacheConfig,
}

impl Default for AutoTtlConfig {
    fn default() -> Self {
        Self {
            timezone: None,
            lookback_days: defaults::DEFAULT_LOOKBACK_DAYS,
            bounds: TtlBounds::default(),
            analysis: AnalysisConfig::default(),
            cache: CacheConfig::default(),
        }
    }
}

/// Overrides supplied by the embedding host (e.g. admin settings).
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub default_ttl: Option<u64>,
    pub max_ttl: Option<u64>,
    pub timezone: Option<String>,
}

impl AutoTtlConfig {
    /// Load configuration with layered resolution.
    ///
    /// A missing `config_path` file is an error; pass `None` to skip the
    /// file layer entirely.
    pub fn load(
        config_path: Option<&Path>,
        overrides: Option<&ConfigOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        config.apply_env_overrides();

        if let Some(o) = overrides {
            config.apply_overrides(o);
        }

        config.validate()?;

        if !config.bounds.is_consistent() {
            tracing::warn!(
                default_ttl = config.bounds.default_ttl,
                max_ttl = config.bounds.max_ttl,
                "default TTL exceeds max TTL; every feed will use the default TTL"
            );
        }

        Ok(config)
    }

    /// Read and parse a TOML config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    ///
    /// `default_ttl > max_ttl` is accepted: the clamp has a defined answer for it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.cache.smoothing_weight) {
            return Err(ConfigError::ValidationFailed {
                field: "cache.smoothing_weight".to_string(),
                message: "must be between 0.0 and 1.0".to_string(),
            });
        }
        if self.cache.pattern_expiry_secs == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "cache.pattern_expiry_secs".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.cache.ttl_expiry_secs == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "cache.ttl_expiry_secs".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.lookback_days == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "lookback_days".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.analysis.sufficient_entries < self.analysis.min_entries {
            return Err(ConfigError::ValidationFailed {
                field: "analysis.sufficient_entries".to_string(),
                message: format!(
                    "must be at least analysis.min_entries ({})",
                    self.analysis.min_entries
                ),
            });
        }
        Ok(())
    }

    /// History cutoff for a lookup made at `now`.
    pub fn history_cutoff(&self, now: i64) -> i64 {
        let lookback = i64::from(self.lookback_days).saturating_mul(SECONDS_PER_DAY);
        now.saturating_sub(lookback)
    }

    /// Apply environment variable overrides.
    /// Pattern: `AUTOTTL_DEFAULT_TTL`, `AUTOTTL_MAX_TTL`, etc.
    pub fn apply_env_overrides(&mut self) {
        self.apply_env_with(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary variable lookup.
    /// Unparseable values are ignored.
    pub fn apply_env_with(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(v) = lookup("AUTOTTL_DEFAULT_TTL").and_then(|v| v.parse::<u64>().ok()) {
            self.bounds.default_ttl = v;
        }
        if let Some(v) = lookup("AUTOTTL_MAX_TTL").and_then(|v| v.parse::<u64>().ok()) {
            self.bounds.max_ttl = v;
        }
        if let Some(v) = lookup("AUTOTTL_TIMEZONE") {
            self.timezone = Some(v);
        }
        if let Some(v) = lookup("AUTOTTL_LOOKBACK_DAYS").and_then(|v| v.parse::<u32>().ok()) {
            self.lookback_days = v;
        }
    }

    /// Apply host overrides (highest priority).
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(v) = overrides.default_ttl {
            self.bounds.default_ttl = v;
        }
        if let Some(v) = overrides.max_ttl {
            self.bounds.max_ttl = v;
        }
        if let Some(ref v) = overrides.timezone {
            self.timezone = Some(v.clone());
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
