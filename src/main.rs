mod config;
mod consts;
mod data;
mod error;
mod logging;
mod session;
mod theme;
mod ui;

use crate::config::{Config, get_config_path};
use crate::consts::cli_consts::{SNAPSHOT_DEFAULT_HEIGHT, SNAPSHOT_DEFAULT_WIDTH};
use crate::data::DatasetExport;
use crate::error::DashboardError;
use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Social media analytics dashboard for the terminal
struct Args {
    /// Path to the config file. Defaults to ~/.social-pulse/config.json
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Open the interactive dashboard
    Start {
        /// Leave the terminal's own background colour in place.
        #[arg(long, default_value_t = false)]
        no_background: bool,
    },
    /// Print a single rendered frame of the dashboard as plain text
    Snapshot {
        /// Render the dark theme instead of the light one.
        #[arg(long, default_value_t = false)]
        dark: bool,

        /// Frame width in columns.
        #[arg(long, default_value_t = SNAPSHOT_DEFAULT_WIDTH)]
        width: u16,

        /// Frame height in rows.
        #[arg(long, default_value_t = SNAPSHOT_DEFAULT_HEIGHT)]
        height: u16,
    },
    /// Print the compiled-in datasets as JSON
    Data,
    /// Write a default configuration file
    InitConfig {
        /// Overwrite an existing file.
        #[arg(long, default_value_t = false)]
        force: bool,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    match args.command {
        Command::InitConfig { force } => {
            let config_path = resolve_config_path(args.config)?;
            init_config(&config_path, force).map_err(Into::into)
        }
        Command::Start { no_background } => {
            let config = prepare(args.config)?;
            let with_background = config.with_background_color && !no_background;
            session::run_tui_mode(&config, with_background)
        }
        Command::Snapshot {
            dark,
            width,
            height,
        } => {
            let config = prepare(args.config)?;
            session::run_snapshot_mode(&config, dark, width, height).map_err(Into::into)
        }
        // Needs neither the config file nor a home directory.
        Command::Data => {
            let json = serde_json::to_string_pretty(&DatasetExport::sample())?;
            println!("{}", json);
            Ok(())
        }
    }
}

fn resolve_config_path(explicit: Option<PathBuf>) -> Result<PathBuf, DashboardError> {
    match explicit {
        Some(path) => Ok(path),
        None => get_config_path(),
    }
}

/// Load the config file and install the file logger.
fn prepare(explicit: Option<PathBuf>) -> Result<Config, DashboardError> {
    let config_path = resolve_config_path(explicit)?;
    let config = Config::load_or_default(&config_path)?;
    if let Some(log_file) = config.resolved_log_file() {
        // Logging is best-effort; the dashboard runs without it.
        if let Err(e) = logging::init(&log_file) {
            eprintln!("Logging disabled: {}", e);
        }
    }
    log::debug!("loaded config from {}", config_path.display());
    Ok(config)
}

/// Write the default configuration to `path`, refusing to clobber it unless forced.
fn init_config(path: &Path, force: bool) -> Result<(), DashboardError> {
    if path.exists() && !force {
        return Err(DashboardError::ConfigExists(path.to_path_buf()));
    }
    Config::default().save(path)?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_config_path_wins() {
        let path = PathBuf::from("/tmp/pulse/config.json");
        assert_eq!(resolve_config_path(Some(path.clone())).unwrap(), path);
    }
}
