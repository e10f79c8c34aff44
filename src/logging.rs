// ==========================================
// Logging initialization
// ==========================================
// tracing + tracing-subscriber, matching the orchestration style the rest
// of the crate instruments with (debug!/info!/warn! at engine entry/exit).
// Log transport (shipping events to a sink) is out of scope: init() wires
// a process-local fmt subscriber only.
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// Initializes the process-wide subscriber. Reads `RUST_LOG` (default
/// `info`), e.g. `RUST_LOG=debug` or `RUST_LOG=mold_plan_core=trace`.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_line_number(true)
        .init();
}

/// Test-scoped subscriber: debug level, routed through the test writer so
/// `cargo test -- --nocapture` shows engine instrumentation.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
