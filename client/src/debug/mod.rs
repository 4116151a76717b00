//! # Logging Infrastructure
//!
//! File-based structured logging for the client and the `alignerr` CLI.
//!
//! ## Usage
//!
//! ```rust,no_run
//! // Initialize at startup and keep the guard alive
//! let _guard = client::debug::init_logger();
//!
//! tracing::info!(endpoint = "/wallet/", duration_ms = 34, "API call completed");
//! ```
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (default: `client=info,warn`)
//! - `ALIGNERR_LOG_DIR`: Log directory (default: `logs`)
//! - `ALIGNERR_LOG_STDERR`: Mirror logs to stderr (1=on, 0=off)

pub mod config;
pub mod logger;

pub use config::LogConfig;
pub use logger::init as init_logger;
