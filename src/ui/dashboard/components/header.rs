//! Dashboard header component
//!
//! Renders the page title

use crate::theme::{ThemeState, resolve_style};
use crate::ui::dashboard::utils::hex_to_color;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub const TITLE: &str = "Social Media Analytics";

/// Render the centred page title.
pub fn render_header(f: &mut Frame, area: Rect, theme: ThemeState) {
    let tokens = resolve_style(theme);

    let title = Paragraph::new(TITLE)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(hex_to_color(tokens.title_fg))
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick)
                .border_style(Style::default().fg(hex_to_color(tokens.muted_fg))),
        );
    f.render_widget(title, area);
}
