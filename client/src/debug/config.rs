//! Logging configuration from environment variables

use std::path::PathBuf;

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "client=info,warn";

/// Log file name inside the log directory (rotated daily).
pub const LOG_FILE_NAME: &str = "alignerr-client.log";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Log directory (for rotation)
    pub log_dir: PathBuf,
    /// Log level filter (e.g., "client=debug,info")
    pub log_level: String,
    /// Mirror log lines to stderr
    pub stderr: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("logs"),
            log_level: DEFAULT_FILTER.to_string(),
            stderr: false,
        }
    }
}

impl LogConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            log_dir: std::env::var("ALIGNERR_LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("logs")),
            log_level: std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_FILTER.to_string()),
            stderr: std::env::var("ALIGNERR_LOG_STDERR")
                .map(|v| v == "1")
                .unwrap_or(false),
        }
    }

    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(LOG_FILE_NAME)
    }

    /// Check if debug logging is enabled
    pub fn is_debug_enabled(&self) -> bool {
        self.log_level.contains("debug") || self.log_level.contains("trace")
    }
}
