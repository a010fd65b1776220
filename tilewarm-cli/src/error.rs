//! CLI error handling with user-friendly messages.

use std::fmt;
use std::process;

use tilewarm::warmer::WarmerError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Warming run failed
    Warm(WarmerError),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        if let CliError::Warm(WarmerError::BackendInit(_)) = self {
            eprintln!();
            eprintln!("Make sure the tile server is running and reachable,");
            eprintln!("and that --server-url points at its base URL.");
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Warm(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Warm(e) => Some(e),
            _ => None,
        }
    }
}

impl From<WarmerError> for CliError {
    fn from(e: WarmerError) -> Self {
        CliError::Warm(e)
    }
}
