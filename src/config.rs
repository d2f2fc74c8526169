//! Application configuration.
//!
//! Holds startup options only. The theme flag is never written here.

use crate::consts::cli_consts::{APP_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_TICK_RATE_MS, LOG_FILE_NAME};
use crate::error::DashboardError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::{fs, io};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Paint the whole terminal with the theme's page background.
    pub with_background_color: bool,
    /// Input poll interval of the interactive dashboard, in milliseconds.
    pub tick_rate_ms: u64,
    /// Directory platform logo references are resolved against.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assets_dir: Option<PathBuf>,
    /// Where log records go. Defaults to `~/.social-pulse/dashboard.log`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            with_background_color: true,
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
            assets_dir: None,
            log_file: None,
        }
    }
}

impl Config {
    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns an error if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, DashboardError> {
        let buf = fs::read(path)?;
        serde_json::from_slice(&buf).map_err(|source| DashboardError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Like [`Config::load_from_file`], but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, DashboardError> {
        match Self::load_from_file(path) {
            Err(DashboardError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    pub fn save(&self, path: &Path) -> Result<(), DashboardError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Log file to use, falling back to the app directory under `$HOME`.
    pub fn resolved_log_file(&self) -> Option<PathBuf> {
        self.log_file
            .clone()
            .or_else(|| app_dir().ok().map(|dir| dir.join(LOG_FILE_NAME)))
    }

    /// Directory logo references are resolved against.
    pub fn resolved_assets_dir(&self) -> PathBuf {
        self.assets_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}

fn app_dir() -> Result<PathBuf, DashboardError> {
    let home = home::home_dir().ok_or(DashboardError::HomeDirUnavailable)?;
    Ok(home.join(APP_DIR_NAME))
}

/// Default location of the config file.
pub fn get_config_path() -> Result<PathBuf, DashboardError> {
    Ok(app_dir()?.join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    // Loading a saved configuration file should return the same configuration.
    fn test_load_recovers_saved_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = Config {
            tick_rate_ms: 250,
            assets_dir: Some(PathBuf::from("/opt/logos")),
            ..Config::default()
        };
        config.save(&path).unwrap();

        let loaded_config = Config::load_from_file(&path).unwrap();
        assert_eq!(config, loaded_config);
    }

    #[test]
    // Saving a configuration should create directories if they don't exist.
    fn test_save_creates_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nonexistent_dir").join("config.json");

        let result = Config::default().save(&path);

        assert!(result.is_ok(), "Failed to save config");
        assert!(
            path.parent().unwrap().exists(),
            "Parent directory does not exist"
        );
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.json");

        let config = Config::load_or_default(&path).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    // Fields left out of the file take their default values.
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "with_background_color": false }"#).unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert!(!config.with_background_color);
        assert_eq!(config.tick_rate_ms, DEFAULT_TICK_RATE_MS);
    }

    #[test]
    // Loading an invalid JSON file should return an error.
    fn test_load_rejects_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("invalid_config.json");

        let mut file = File::create(&path).unwrap();
        writeln!(file, "invalid json").unwrap();

        let result = Config::load_or_default(&path);
        assert!(matches!(result, Err(DashboardError::ConfigParse { .. })));
    }

    #[test]
    fn test_explicit_log_file_wins() {
        let config = Config {
            log_file: Some(PathBuf::from("/tmp/pulse.log")),
            ..Config::default()
        };
        assert_eq!(
            config.resolved_log_file(),
            Some(PathBuf::from("/tmp/pulse.log"))
        );
    }
}
