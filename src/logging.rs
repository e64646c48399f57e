//! Log setup for the CLI.
//!
//! The library only emits `tracing` events; installing a subscriber is the
//! binary's job. `RUST_LOG` overrides the default filter.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn default_filter(verbose: bool) -> &'static str {
    if verbose { "vitrine=debug,info" } else { "vitrine=info" }
}

/// Install a compact stderr logger. Safe to call more than once; later calls
/// are no-ops.
pub fn init_cli_logger(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
}
