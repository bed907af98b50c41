//! Logging setup
//!
//! Uses `tracing-subscriber` with an `EnvFilter`. `RUST_LOG` wins when set;
//! otherwise the level is `warn`, or `debug` with `--verbose`.
//! Output goes to stderr so `--json` stdout stays machine readable.

use tracing_subscriber::{fmt, EnvFilter};

/// Install the global subscriber
///
/// # Environment
/// - RUST_LOG: level filter, e.g. `RUST_LOG=slab_core=debug`
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(verbose)
        .with_writer(std::io::stderr)
        .try_init();
}
