mod config_error;
mod history_error;

pub use config_error::ConfigError;
pub use history_error::HistoryError;

/// Crate-wide error type for the adaptive TTL engine.
///
/// Only data-source and configuration problems surface here. Insufficient
/// history and inconsistent bounds are defined degraded modes, not errors.
#[derive(Debug, thiserror::Error)]
pub enum AutoTtlError {
    #[error(transparent)]
    History(#[from] HistoryError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl AutoTtlError {
    /// Whether the caller can recover by falling back to a bounded TTL.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Config(_))
    }
}

/// Convenience alias used throughout the workspace.
pub type AutoTtlResult<T> = Result<T, AutoTtlError>;
