//! Logging Infrastructure
//!
//! `RUST_LOG` wins when set; otherwise the configured level applies to this
//! crate and `tower_http`. With a log directory, output goes to a daily
//! rolling file instead of stdout.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Default filter directives
pub const DEFAULT_FILTER: &str = "timeless_server=info,tower_http=info";

/// Initialize the logger with the default filter on stdout
pub fn init_logger() -> Option<WorkerGuard> {
    init_logger_with_file(None, None)
}

/// Initialize the logger with an optional level and file output
///
/// The returned guard flushes the file writer on drop; keep it alive for
/// the life of the process.
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match log_level {
        Some(level) => EnvFilter::new(format!("timeless_server={level},tower_http={level}")),
        None => EnvFilter::new(DEFAULT_FILTER),
    });

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(true);

    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if std::fs::create_dir_all(log_path).is_ok() {
            let file_appender = tracing_appender::rolling::daily(log_path, "timeless-server.log");
            let (writer, guard) = tracing_appender::non_blocking(file_appender);
            // try_init: a subscriber may already be installed (tests)
            let _ = subscriber.with_ansi(false).with_writer(writer).try_init();
            return Some(guard);
        }
        eprintln!("log directory {dir} is not writable, logging to stdout");
    }

    let _ = subscriber.try_init();
    None
}
