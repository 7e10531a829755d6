//! Diagnostic logging.
//!
//! Command output goes to stdout; diagnostics go to stderr through `tracing`.
//! The level is `warn` by default, `debug` with `--verbose`, and the
//! `OTAZO_LOG` environment variable (an `EnvFilter` directive) overrides both.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_ENV_VAR: &str = "OTAZO_LOG";

fn default_directive(verbose: bool) -> &'static str {
    if verbose { "otazo=debug" } else { "warn" }
}

/// Build the filter from `OTAZO_LOG`, falling back to the verbosity default.
pub fn build_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)))
}

/// Install the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init(verbose: bool) {
    let _ = tracing_subscriber::registry()
        .with(build_filter(verbose))
        .with(
            fmt::layer()
                .compact()
                .without_time()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init();
}
