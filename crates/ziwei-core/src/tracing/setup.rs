//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the filter directives.
pub const LOG_ENV_VAR: &str = "ZIWEI_LOG";

/// Filter used when `ZIWEI_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "ziwei=info";

static INIT: Once = Once::new();

/// Initialize logging for the engine.
///
/// Reads `ZIWEI_LOG` for per-module log levels, e.g.
/// `ZIWEI_LOG=ziwei_scoring::pipeline=debug,ziwei_core=warn`.
///
/// Idempotent; later calls are no-ops. Uses `try_init` so a subscriber
/// installed by the host application is left in place.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
