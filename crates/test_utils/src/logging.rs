//! Test logging setup

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Initializes a tracing subscriber for tests, once per process
///
/// Honors `RUST_LOG`; defaults to warnings only so test output stays
/// quiet unless a failure is being investigated.
pub fn init_test_logging() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}
