//! Error types for the application shell (configuration, logging, terminal I/O).

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    /// Terminal or filesystem I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file exists but is not valid JSON for [`crate::config::Config`].
    #[error("Invalid config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Refused to overwrite an existing configuration file.
    #[error("Config file already exists at {0} (use --force to overwrite)")]
    ConfigExists(PathBuf),

    /// No home directory to place the default config and log file in.
    #[error("Could not determine home directory")]
    HomeDirUnavailable,

    /// Installing the global tracing subscriber failed.
    #[error("Logger error: {0}")]
    Logger(#[from] tracing_subscriber::util::TryInitError),

    /// Serializing data for output failed.
    #[error("Serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}
