//! Structured logging setup
//!
//! Logs go to stderr so they never mix with command output. `RUST_LOG`
//! takes precedence over the verbosity flags.

use tracing_subscriber::EnvFilter;

/// Default filter directive for the given verbosity flags
pub fn default_directive(verbose: bool, quiet: bool) -> &'static str {
    if verbose {
        "dora=debug"
    } else if quiet {
        "dora=error"
    } else {
        "dora=warn"
    }
}

/// Install the global tracing subscriber
pub fn init(verbose: bool, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, quiet)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
