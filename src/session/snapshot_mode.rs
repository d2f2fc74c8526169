//! Snapshot mode execution
//!
//! Renders a single frame off-screen and prints it as plain text.

use crate::config::Config;
use crate::data::DashboardData;
use crate::error::DashboardError;
use crate::theme::{RootClass, ThemeStore};
use crate::ui::dashboard::{AssetResolver, DashboardState, render_dashboard};
use log::debug;
use ratatui::Terminal;
use ratatui::backend::TestBackend;

/// Render the dashboard once and return its text, one line per terminal row.
pub fn render_snapshot(
    data: DashboardData<'static>,
    config: &Config,
    dark: bool,
    width: u16,
    height: u16,
) -> Result<String, DashboardError> {
    let root = RootClass::default();
    let mut store = ThemeStore::new(Box::new(root.clone()));
    if dark {
        store.toggle();
    }

    let state = DashboardState::new(
        data,
        &AssetResolver::new(config.resolved_assets_dir()),
        root.clone(),
        config.with_background_color,
    );

    let mut terminal = Terminal::new(TestBackend::new(width, height))?;
    terminal.draw(|f| {
        render_dashboard(f, &state, store.current_state());
    })?;

    let buffer = terminal.backend().buffer();
    let lines: Vec<String> = (0..buffer.area.height)
        .map(|y| {
            let row: String = (0..buffer.area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect();
            row.trim_end().to_string()
        })
        .collect();
    debug!(
        "rendered {}x{} snapshot, root class {:?}",
        width,
        height,
        root.token()
    );
    Ok(lines.join("\n"))
}

/// Print a snapshot of the sample dashboard to stdout.
pub fn run_snapshot_mode(
    config: &Config,
    dark: bool,
    width: u16,
    height: u16,
) -> Result<(), DashboardError> {
    let text = render_snapshot(DashboardData::sample(), config, dark, width, height)?;
    println!("{}", text);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_contains_dashboard_text() {
        let text = render_snapshot(DashboardData::sample(), &Config::default(), false, 120, 60)
            .unwrap();
        assert_eq!(text.split('\n').count(), 60);
        assert!(text.contains("Social Media Analytics"));
        assert!(text.contains("50,000"));
        assert!(text.contains("☾"));
    }

    #[test]
    fn test_dark_snapshot_shows_sun() {
        let text =
            render_snapshot(DashboardData::sample(), &Config::default(), true, 120, 60).unwrap();
        assert!(text.contains("☀"));
        assert!(!text.contains("☾"));
    }
}
