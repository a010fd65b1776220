//! Logging infrastructure for TileWarm.
//!
//! Structured logging with file output:
//! - Writes to `logs/tilewarm.log` (cleared on session start)
//! - File-only so the terminal stays free for the progress bar
//! - Configurable via RUST_LOG environment variable

use std::fs;
use std::io;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Guard that must be kept alive for the duration of logging.
///
/// Dropping this guard will flush and close the log file writer.
pub struct LoggingGuard {
    _file_guard: WorkerGuard,
}

/// Initialize the logging system.
///
/// Creates the logs directory if needed, clears the previous log file,
/// and installs a non-blocking file writer as the global subscriber.
///
/// # Arguments
///
/// * `log_dir` - Directory for log files (e.g., "logs")
/// * `log_file` - Log filename (e.g., "tilewarm.log")
/// * `debug_mode` - When true, default to debug level instead of info
///   (RUST_LOG still takes precedence)
///
/// # Errors
///
/// Returns error if the log directory cannot be created or the log file
/// cannot be cleared.
pub fn init_logging(
    log_dir: &str,
    log_file: &str,
    debug_mode: bool,
) -> Result<LoggingGuard, io::Error> {
    fs::create_dir_all(log_dir)?;

    // Clear previous log file by writing empty content
    let log_path = Path::new(log_dir).join(log_file);
    fs::write(&log_path, "")?;

    let file_appender = tracing_appender::rolling::never(log_dir, log_file);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    let default_level = if debug_mode { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}

/// Get default log directory path.
pub fn default_log_dir() -> &'static str {
    "logs"
}

/// Get default log file name.
pub fn default_log_file() -> &'static str {
    "tilewarm.log"
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn test_log_dir() -> PathBuf {
        // Unique directory per test to avoid conflicts
        let timestamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let dir = PathBuf::from(format!("test_logs_{}", timestamp));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_default_paths() {
        assert_eq!(default_log_dir(), "logs");
        assert_eq!(default_log_file(), "tilewarm.log");
    }

    #[test]
    fn test_clears_existing_file() {
        // init_logging itself can't run twice per process (global
        // subscriber), so exercise the file operations directly
        let log_dir = test_log_dir();
        fs::create_dir_all(&log_dir).expect("Failed to create test dir");
        let log_file = log_dir.join("test.log");
        fs::write(&log_file, "old log data").expect("Failed to write test data");

        fs::write(&log_file, "").expect("Failed to clear log file");
        assert_eq!(fs::read_to_string(&log_file).unwrap(), "");

        fs::remove_dir_all(&log_dir).expect("Failed to cleanup");
    }
}
