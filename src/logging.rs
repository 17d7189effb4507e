//! Logging setup.
//!
//! The library only emits `tracing` events. Hosts that have no subscriber
//! of their own can install a compact console one here.

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs a compact console subscriber.
///
/// `RUST_LOG` wins when set; otherwise `u_cinema=debug` (verbose) or
/// `u_cinema=info`. Fails if a global subscriber is already installed.
pub fn init_logger(verbose: bool) -> Result<(), TryInitError> {
    let default_directive = if verbose {
        "u_cinema=debug"
    } else {
        "u_cinema=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init()
}
