//! Structured JSON logging to stderr, plus process lifecycle events.
//!
//! stdout stays reserved for user-facing output; everything diagnostic goes
//! through `tracing` so long unattended runs leave a machine-readable trail.

use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with optional quiet mode.
///
/// When `quiet` is true, only error-level events are emitted.
/// When `quiet` is false, info-level and above events are emitted (default).
pub fn init_logging(quiet: bool) {
    let level = if quiet { "error" } else { "info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(
            EnvFilter::from_default_env()
                .add_directive(
                    format!("vigil={level}")
                        .parse()
                        .expect("Invalid log directive"),
                )
                .add_directive(
                    format!("vigil_core={level}")
                        .parse()
                        .expect("Invalid log directive"),
                ),
        )
        .init();
}

/// Mark a run of the tool in the log trail, with the version that produced it.
pub fn log_startup() {
    info!(event = "app.started", version = env!("CARGO_PKG_VERSION"));
}

/// Record a failure that the process is about to swallow.
///
/// The CLI reports errors and still exits zero, so this event is the only
/// durable evidence a run went wrong.
pub fn log_failure(error: &dyn std::error::Error) {
    error!(event = "app.failed", error = %error);
}
