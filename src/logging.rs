//! Logging bootstrap for the binaries.
//!
//! The library only emits through the `log` facade. Binaries call
//! [`init_logging`] once; output goes to stderr because stdout carries the
//! RPC protocol. `RUST_LOG` overrides the requested level.

use flexi_logger::{Logger, LoggerHandle};

const LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Starts stderr logging at `level`.
///
/// The returned handle must be kept alive for the life of the process.
///
/// # Errors
/// Returns a human-readable message for an unknown level or when the logger
/// backend cannot start (e.g. a logger is already installed).
pub fn init_logging(level: &str) -> Result<LoggerHandle, String> {
    let normalized = level.trim().to_ascii_lowercase();
    if !LEVELS.contains(&normalized.as_str()) {
        return Err(format!("unsupported log level `{}`", level));
    }
    Logger::try_with_env_or_str(&normalized)
        .map_err(|e| format!("invalid log specification: {}", e))?
        .log_to_stderr()
        .start()
        .map_err(|e| format!("failed to start logger: {}", e))
}
