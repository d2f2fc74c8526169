//! File-backed tracing subscriber.
//!
//! The interactive dashboard owns stdout, so records are appended to a file.
//! `log` records from the rest of the crate reach it through the log bridge.

use crate::error::DashboardError;
use std::fs::{self, File, OpenOptions};
use std::path::Path;
use std::sync::Arc;
use tracing::Subscriber;
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt};

const DEFAULT_FILTER: &str = "info";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Filter directives from `RUST_LOG`, or `info` when unset or invalid.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

fn open_log_file(path: &Path) -> Result<File, DashboardError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(OpenOptions::new().create(true).append(true).open(path)?)
}

/// Subscriber writing plain-text records that pass `filter` to `file`.
pub fn file_subscriber(filter: EnvFilter, file: File) -> impl Subscriber + Send + Sync {
    tracing_subscriber::registry().with(filter).with(
        fmt::layer()
            .with_writer(Arc::new(file))
            .with_ansi(false)
            .with_timer(ChronoLocal::new(TIMESTAMP_FORMAT.to_string())),
    )
}

/// Install the global subscriber writing to `path`, filtered by `RUST_LOG`.
pub fn init(path: &Path) -> Result<(), DashboardError> {
    let file = open_log_file(path)?;
    file_subscriber(env_filter(), file).try_init()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn capture(directives: &str, emit: impl FnOnce()) -> String {
        let dir = tempdir().unwrap();
        let path = dir.path().join("logs").join("dashboard.log");
        let file = open_log_file(&path).unwrap();
        tracing::subscriber::with_default(
            file_subscriber(EnvFilter::new(directives), file),
            emit,
        );
        fs::read_to_string(&path).unwrap()
    }

    #[test]
    fn test_directives_apply_per_target() {
        let contents = capture("ratatui=warn,social_pulse=debug", || {
            tracing::debug!(target: "social_pulse::theme", "theme toggled");
            tracing::info!(target: "ratatui::buffer", "resize noise");
            tracing::warn!(target: "ratatui::buffer", "slow frame");
        });

        assert!(contents.contains("theme toggled"));
        assert!(!contents.contains("resize noise"));
        assert!(contents.contains("slow frame"));
    }

    #[test]
    fn test_records_are_plain_text_lines() {
        let contents = capture("info", || {
            tracing::debug!(target: "social_pulse", "ignored");
            tracing::error!(target: "social_pulse", "kept");
        });

        assert!(!contents.contains("ignored"));
        assert!(contents.contains("ERROR"));
        assert!(contents.contains("social_pulse: kept"));
        assert!(!contents.contains('\u{1b}'));
        assert_eq!(contents.lines().count(), 1);
    }
}
