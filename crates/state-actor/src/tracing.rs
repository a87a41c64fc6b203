//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing_subscriber::fmt` subscriber.
//!
//! ## Configuration
//!
//! - `RUST_LOG`, when set, wins over the default passed by the caller.
//! - Module paths are hidden (`with_target(false)`); actors log a `model_type` field
//!   instead.
//!
//! ```bash
//! RUST_LOG=info cargo run      # lifecycle and state transitions
//! RUST_LOG=debug cargo run     # every command, timer and payload
//! RUST_LOG=trace cargo run     # timer scheduling and cancellation
//! ```
//!
//! ## What Gets Traced
//!
//! - **Actor lifecycle**: start, shutdown, timers cancelled at shutdown
//! - **Commands**: `Dispatch command=...` at debug, `Command rejected` at warn
//! - **Timers**: `Timer fired task=timer_1`, `Stale timer dropped`

use tracing_subscriber::EnvFilter;

/// Initializes the global subscriber.
///
/// Safe to call more than once (tests, embedded use): later calls are no-ops.
pub fn setup_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // Don't show module paths - we use model_type instead
        .compact()
        .try_init();
}
