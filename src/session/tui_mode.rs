//! TUI mode execution

use super::messages::{exit_message, starting_message};
use crate::config::Config;
use crate::data::DashboardData;
use crate::ui::{self, UIConfig};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::info;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::time::Duration;
use std::{error::Error, io};

/// Runs the interactive dashboard until the user quits.
///
/// The terminal is restored before any error from the UI loop is returned.
pub fn run_tui_mode(config: &Config, with_background: bool) -> Result<(), Box<dyn Error>> {
    println!("{}", starting_message());

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Initialize the terminal with Crossterm backend
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let ui_config = UIConfig::new(
        with_background,
        config.resolved_assets_dir(),
        Duration::from_millis(config.tick_rate_ms),
    );
    let app = ui::App::new(DashboardData::sample(), ui_config);
    info!("dashboard started");

    let result = ui::run(&mut terminal, app);

    // Clean up the terminal after running the application
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    let theme = result?;
    info!("dashboard closed in {} theme", theme.name());
    println!("{}", exit_message(theme));

    Ok(())
}
