//! Audience distribution chart component

use super::card_block;
use crate::data::PlatformAudience;
use crate::theme::{ThemeState, resolve_style};
use crate::ui::charts::{BarSeriesStyle, TooltipStyle, render_bar_series};
use crate::ui::dashboard::utils::hex_to_color;
use ratatui::Frame;
use ratatui::layout::{Position, Rect};

pub const TITLE: &str = "Audience Distribution";

/// One `(platform, followers)` pair per audience entry, in dataset order.
pub fn distribution_series(audience: &[PlatformAudience]) -> Vec<(&str, u64)> {
    audience
        .iter()
        .map(|p| (p.platform_name, p.follower_count))
        .collect()
}

/// Render the follower bar chart inside a titled card.
pub fn render_distribution_chart(
    f: &mut Frame,
    area: Rect,
    audience: &[PlatformAudience],
    theme: ThemeState,
    hover: Option<Position>,
) {
    let tokens = resolve_style(theme);
    let block = card_block(&tokens, None).title(TITLE);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let style = BarSeriesStyle {
        fill: hex_to_color(tokens.bar_fill),
        axis_tick: hex_to_color(tokens.axis_tick_fg),
        tooltip: TooltipStyle {
            bg: hex_to_color(tokens.tooltip_bg),
            fg: hex_to_color(tokens.tooltip_fg),
        },
    };
    render_bar_series(f, inner, &distribution_series(audience), style, hover);
}
