//! Dashboard component modules
//!
//! Each component is a render function of its data slice and the theme flag.

pub mod breakdown_chart;
pub mod distribution_chart;
pub mod follower_card;
pub mod footer;
pub mod header;
pub mod metric_card;
pub mod theme_toggle;

use crate::theme::StyleTokens;
use crate::ui::dashboard::utils::hex_to_color;
use ratatui::prelude::{Color, Style};
use ratatui::widgets::{Block, BorderType, Borders, Padding};

/// Rounded card frame shared by cards and charts.
pub(crate) fn card_block(tokens: &StyleTokens, border: Option<Color>) -> Block<'static> {
    let border = border.unwrap_or_else(|| hex_to_color(tokens.muted_fg));
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .title_style(Style::default().fg(hex_to_color(tokens.card_heading_fg)))
        .style(Style::default().bg(hex_to_color(tokens.card_bg)))
        .padding(Padding::horizontal(1))
}
