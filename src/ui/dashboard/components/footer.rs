//! Dashboard footer component
//!
//! Renders footer with key hints and version info

use crate::consts::cli_consts::KEY_HINTS;
use crate::theme::{ThemeState, resolve_style};
use crate::ui::dashboard::utils::hex_to_color;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::Style;
use ratatui::widgets::{Block, Borders, Paragraph};

/// Render footer.
pub fn render_footer(f: &mut Frame, area: Rect, theme: ThemeState) {
    let tokens = resolve_style(theme);
    let footer_text = format!("{} | social-pulse v{}", KEY_HINTS, env!("CARGO_PKG_VERSION"));

    let footer = Paragraph::new(footer_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(hex_to_color(tokens.muted_fg)))
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(hex_to_color(tokens.muted_fg))),
        );
    f.render_widget(footer, area);
}
