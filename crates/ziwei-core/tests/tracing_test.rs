//! Tracing setup is idempotent.

use ziwei_core::tracing::{init_tracing, DEFAULT_FILTER, LOG_ENV_VAR};

#[test]
fn test_init_tracing_twice_is_safe() {
    init_tracing();
    init_tracing();
    tracing::info!(target: "ziwei", "tracing initialized");
}

#[test]
fn test_filter_constants() {
    assert_eq!(LOG_ENV_VAR, "ZIWEI_LOG");
    assert_eq!(DEFAULT_FILTER, "ziwei=info");
}
