//! Logging Infrastructure
//!
//! Structured logging setup for the till: stderr in development, optional
//! daily-rolling files for installed tills.

use std::path::Path;

/// Initialize the logger with defaults (info level, stderr).
pub fn init_logger() {
    init_logger_with_file(None, None);
}

/// Initialize the logger with an explicit level and optional file output.
///
/// When `log_dir` points at an existing directory, output goes to a
/// daily-rolling file inside it; otherwise everything goes to stderr.
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level.parse().unwrap_or(tracing::Level::INFO))
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir {
        if Path::new(dir).exists() {
            let file_appender = tracing_appender::rolling::daily(dir, "till-core");
            subscriber.with_writer(file_appender).init();
            return;
        }
    }

    subscriber.init();
}
