//! Application startup and utilities.
//!
//! Exit codes, tracing setup, and error hints supporting the main entry
//! point.

use mt_addrlist::config::ConfigError;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Success (exit code 0).
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Configuration error (exit code 1) - unreadable file, invalid
    /// catalog, malformed timeout, etc.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;

    /// Runtime error (exit code 2) - bind failure, source fetch error, etc.
    ///
    /// Note: This is a function rather than a constant because `ExitCode::from()` is not `const fn`.
    pub fn runtime_error() -> ExitCode {
        ExitCode::from(2)
    }
}

/// Prints helpful hints for common configuration errors.
pub fn print_config_hint(error: &ConfigError) {
    match error {
        ConfigError::FileRead { .. } | ConfigError::NoLists => {
            eprintln!("\nRun 'mt-addrlist init' to generate a configuration template.");
        }
        ConfigError::MissingTimeout { .. } => {
            eprintln!(
                "\nSet 'config.timeout' or a per-list 'timeout' (NdNhNmNs form, e.g. \"4h\")."
            );
        }
        _ => {}
    }
}

/// Sets up the tracing subscriber for logging.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    // Logs go to stderr; stdout is reserved for rendered scripts.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
