//! File-based logging initialization

use super::config::{LogConfig, DEFAULT_FILTER, LOG_FILE_NAME};
use std::fs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the logging system
///
/// Sets up:
/// - Daily log rotation for `logs/alignerr-client.log`
/// - Non-blocking file writes
/// - An optional stderr layer (`ALIGNERR_LOG_STDERR=1`)
/// - A panic hook that records panics in the log
///
/// The returned guard flushes the file writer when dropped, so the caller
/// keeps it for the lifetime of the program. Returns `None` when the log
/// directory cannot be created; the program then runs without logging.
pub fn init() -> Option<WorkerGuard> {
    init_with(LogConfig::from_env())
}

pub fn init_with(config: LogConfig) -> Option<WorkerGuard> {
    if let Err(e) = fs::create_dir_all(&config.log_dir) {
        eprintln!("Warning: Failed to create log directory: {}", e);
        return None;
    }

    let file_appender = tracing_appender::rolling::daily(&config.log_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_new(&config.log_level)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false);

    let stderr_layer = config.stderr.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
    });

    let installed = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init();

    if let Err(e) = installed {
        eprintln!("Warning: Logging already initialized: {}", e);
        return Some(guard);
    }

    tracing::info!(
        log_file = %config.log_file().display(),
        log_level = %config.log_level,
        stderr = config.stderr,
        "Logging initialized"
    );

    setup_panic_hook();
    Some(guard)
}

/// Log panics before the default hook prints them.
fn setup_panic_hook() {
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown location".to_string());

        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic payload".to_string()
        };

        tracing::error!(location = %location, message = %message, "Panic");
        default_panic(panic_info);
    }));
}
