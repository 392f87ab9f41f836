//! Tracing initialization and span definitions.

pub mod spans;

use std::sync::Once;

use autottl_core::config::defaults::DEFAULT_LOG_FILTER;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter directives.
pub const LOG_ENV_VAR: &str = "AUTOTTL_LOG";

/// Initialize the autottl tracing/logging system.
///
/// Reads `AUTOTTL_LOG` for filter directives, e.g.
/// `AUTOTTL_LOG=autottl_engine=debug,autottl_core=warn`.
/// Falls back to `autottl=info` if unset or invalid.
///
/// Idempotent. A subscriber installed earlier by the host is left in place.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
        install(filter);
    });
}

/// Initialize tracing with an explicit filter string (for tests or embedding).
pub fn init_tracing_with_filter(filter: &str) {
    let filter = EnvFilter::new(filter);
    INIT.call_once(|| install(filter));
}

fn install(filter: EnvFilter) {
    let result = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true),
        )
        .with(filter)
        .try_init();
    if result.is_err() {
        tracing::debug!("global tracing subscriber already installed");
    }
}
