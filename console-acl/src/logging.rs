//! Logging setup
//!
//! Structured console logging via tracing-subscriber. Denial events carry
//! `target: "security"` (see the `security_log!` macro), so an operator can
//! raise just that target with `RUST_LOG=security=debug`.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize the tracing subscriber
///
/// Filter comes from `RUST_LOG`, defaulting to `info`. Safe to call more
/// than once; later calls are no-ops.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .try_init();
}
