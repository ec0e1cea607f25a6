// ============================================================================
// cloudlog-cli/src/logging.rs
// ============================================================================
//
// LOGGING UTILITIES: Diagnostic Logger Setup
//
// Diagnostics go through the standard `log` crate with `env_logger` as the
// backend, always to stderr so they never mix with the mirrored stdout.
//
// USAGE:
// - RUST_LOG unset: warnings only (debug with --verbose)
// - RUST_LOG=debug: Detailed debugging information
// - RUST_LOG=trace: Very verbose, includes HTTP client internals
//
// AI-ASSISTANT-INFO: Logger initialization for the cloudlog CLI

use env_logger::{Builder, Env, Target};

/// Returns the default filter used when RUST_LOG is not set.
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}

/// Initializes env_logger on stderr.
pub fn init(verbose: bool) {
    Builder::from_env(Env::default().default_filter_or(default_filter(verbose)))
        .target(Target::Stderr)
        .format_timestamp_secs()
        .init();
}
