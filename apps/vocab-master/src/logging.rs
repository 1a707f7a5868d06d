//! File logging. The terminal belongs to the UI, so events go to a file in
//! the data directory instead of stdout.

use crate::config::Config;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Keeps the background log writer alive. Buffered events are flushed when
/// it is dropped.
pub struct FileLogGuard {
    _guard: WorkerGuard,
}

/// Install the global subscriber. Returns `None` if logging stays disabled.
pub fn init_tracing(config: &Config) -> Option<FileLogGuard> {
    let path = config.log_path()?;
    init_file_logging(path.parent()?, &config.logging.file_name, &config.logging.level)
}

fn init_file_logging(log_dir: &Path, file_name: &str, level: &str) -> Option<FileLogGuard> {
    std::fs::create_dir_all(log_dir).ok()?;
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(log_dir)
        .ok()?;
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));
    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .ok()?;

    Some(FileLogGuard { _guard: guard })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_reach_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let log_dir = dir.path().join("logs");

        let guard = init_file_logging(&log_dir, "vocab-master.log", "info").unwrap();
        tracing::info!(score = 15, "session ended");
        drop(guard);

        let content = std::fs::read_to_string(log_dir.join("vocab-master.log")).unwrap();
        assert!(content.contains("session ended"));
        assert!(content.contains("score=15"));
    }
}
