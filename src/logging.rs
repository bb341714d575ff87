//! Logging init: structured events to stderr, leaving stdout for results.

use tracing_subscriber::EnvFilter;

/// Default filter for a verbosity level; `RUST_LOG` takes precedence.
pub fn default_filter(verbose: u8, quiet: bool) -> &'static str {
    match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn,era5_links=info",
        (false, 1) => "info,era5_links=debug",
        (false, _) => "debug,era5_links=trace",
    }
}

/// Initialize logging to stderr. Safe to call once per process.
pub fn init_logging(verbose: u8, quiet: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose, quiet)));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
