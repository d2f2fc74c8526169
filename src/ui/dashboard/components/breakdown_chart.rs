//! Platform breakdown ring chart component

use super::card_block;
use crate::consts::cli_consts::charts::{CELL_ASPECT, RING_INNER_RATIO};
use crate::data::BreakdownSlice;
use crate::theme::{ThemeState, resolve_style};
use crate::ui::charts::{TooltipStyle, render_ring_series};
use crate::ui::dashboard::utils::hex_to_color;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

pub const TITLE: &str = "Platform Breakdown";

const LEGEND_WIDTH: u16 = 20;

/// One `(category, percentage, colour)` triple per slice, in slice order.
pub fn breakdown_series(slices: &[BreakdownSlice]) -> Vec<(&str, f64, Color)> {
    slices
        .iter()
        .map(|s| (s.category_name, s.percentage, hex_to_color(s.accent_color)))
        .collect()
}

/// Square-looking region for the ring, centred in `area`.
fn ring_area(area: Rect) -> Rect {
    let width = area
        .width
        .min((f64::from(area.height) * CELL_ASPECT) as u16);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y,
        width,
        area.height,
    )
}

/// Render the ring chart and its legend inside a titled card.
pub fn render_breakdown_chart(
    f: &mut Frame,
    area: Rect,
    slices: &[BreakdownSlice],
    theme: ThemeState,
    hover: Option<Position>,
) {
    let tokens = resolve_style(theme);
    let block = card_block(&tokens, None).title(TITLE);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Fill(1), Constraint::Length(LEGEND_WIDTH)])
        .split(inner);

    let series = breakdown_series(slices);
    render_ring_series(
        f,
        ring_area(chunks[0]),
        &series,
        RING_INNER_RATIO,
        hex_to_color(tokens.muted_fg),
        TooltipStyle {
            bg: hex_to_color(tokens.tooltip_bg),
            fg: hex_to_color(tokens.tooltip_fg),
        },
        hover,
    );

    let legend: Vec<Line> = series
        .iter()
        .map(|(name, value, color)| {
            Line::from(vec![
                Span::styled("■ ", Style::default().fg(*color)),
                Span::styled(
                    format!("{} {}%", name, value),
                    Style::default().fg(hex_to_color(tokens.card_fg)),
                ),
            ])
        })
        .collect();
    f.render_widget(Paragraph::new(legend), chunks[1]);
}
