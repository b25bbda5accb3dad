// Logging and verbosity control

use tracing::Level;

/// Resolve the log level from CLI flags and the configured default
///
/// `--quiet` wins over `--verbose`. An unrecognised configured level falls
/// back to WARN.
pub fn resolve_level(verbose: bool, quiet: bool, configured: &str) -> Level {
    if quiet {
        Level::ERROR
    } else if verbose {
        Level::DEBUG
    } else {
        configured.parse().unwrap_or(Level::WARN)
    }
}

/// Initialize logging based on CLI flags
///
/// Log output goes to stderr so it never mixes with generated messages or
/// JSON on stdout.
pub fn init_logging(verbose: bool, quiet: bool, configured: &str) {
    let level = resolve_level(verbose, quiet, configured);

    // A subscriber may already be installed when running inside tests
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
