use std::fs::File;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

use crate::config::LogConfig;

/// Install the global subscriber.
///
/// With a log file, everything goes to that file (the TUI owns the terminal);
/// otherwise logs go to stderr. `RUST_LOG` overrides the configured level.
/// The returned guard flushes the file writer on drop and must outlive logging.
pub fn init(cfg: &LogConfig) -> std::io::Result<Option<WorkerGuard>> {
    let level = parse_level(&cfg.level).unwrap_or(LevelFilter::INFO);
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    match &cfg.file {
        Some(path) => {
            let (writer, guard) = tracing_appender::non_blocking(open_log_file(path)?);
            let file_layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_file(true)
                .with_line_number(true)
                .with_filter(filter);
            tracing_subscriber::registry().with(file_layer).init();
            Ok(Some(guard))
        }
        None => {
            let stderr_layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(true)
                .with_target(false)
                .with_filter(filter);
            tracing_subscriber::registry().with(stderr_layer).init();
            Ok(None)
        }
    }
}

fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    File::create(path)
}

pub fn parse_level(s: &str) -> Option<LevelFilter> {
    match s.trim().to_lowercase().as_str() {
        "off" => Some(LevelFilter::OFF),
        "error" => Some(LevelFilter::ERROR),
        "warn" => Some(LevelFilter::WARN),
        "info" => Some(LevelFilter::INFO),
        "debug" => Some(LevelFilter::DEBUG),
        "trace" => Some(LevelFilter::TRACE),
        _ => None,
    }
}
