//! Logging utilities for the WWEX shipping crates.
//!
//! Every crate logs through the `tracing` macros; this module installs the
//! subscriber once at startup and offers a couple of helpers for logging
//! results at the call boundary.

use tracing::{error, info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Crates whose log level is raised by [`init_with_level`].
const WWEX_TARGETS: [&str; 4] = [
    "wwex_config",
    "wwex_common",
    "wwex_speedship",
    "wwex_speedfreight",
];

/// Initialize the tracing subscriber at INFO level.
///
/// # Examples
///
/// ```
/// use wwex_common::logging;
///
/// // Initialize with default log level (INFO)
/// logging::init();
///
/// // Initialize with a specific log level
/// logging::init_with_level(tracing::Level::DEBUG);
/// ```
pub fn init() {
    init_with_level(Level::INFO);
}

/// Initialize the tracing subscriber with a specific log level.
///
/// `RUST_LOG` directives are honoured; the level given here applies to the
/// WWEX crates. Calling this more than once is harmless.
pub fn init_with_level(level: Level) {
    let mut filter = EnvFilter::from_default_env();
    for target in WWEX_TARGETS {
        if let Ok(directive) = format!("{}={}", target, level).parse() {
            filter = filter.add_directive(directive);
        }
    }

    // A global subscriber may already be installed (tests, host application)
    let result = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_thread_ids(true)
                .with_thread_names(true),
        )
        .with(filter)
        .try_init();

    if result.is_ok() {
        info!("Logging initialized at level: {}", level);
    }
}

/// Log a result, with different messages for success and error cases.
///
/// Returns the original result, allowing this function to be used in a chain.
pub fn log_result<T, E: std::fmt::Display>(
    result: Result<T, E>,
    success_message: &str,
    error_context: &str,
) -> Result<T, E> {
    match &result {
        Ok(_) => info!("{}", success_message),
        Err(e) => error!("{}: {}", error_context, e),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_does_not_panic() {
        init();
        init_with_level(Level::DEBUG);
    }

    #[test]
    fn test_log_result_passes_through() {
        let ok: Result<u8, String> = Ok(3);
        assert_eq!(log_result(ok, "done", "failed"), Ok(3));

        let err: Result<u8, String> = Err("nope".to_string());
        assert_eq!(log_result(err, "done", "failed"), Err("nope".to_string()));
    }
}
