//! Dashboard main renderer

use super::components::{
    breakdown_chart, distribution_chart, follower_card, footer, header, metric_card, theme_toggle,
};
use super::state::DashboardState;
use super::utils::{grid_cells, grid_height, hex_to_color};
use crate::consts::cli_consts::MD_BREAKPOINT_COLS;
use crate::consts::cli_consts::layout::{
    CHART_MIN_HEIGHT, FOLLOWER_CARD_HEIGHT, FOOTER_HEIGHT, GRID_GAP, METRIC_CARD_HEIGHT,
    TITLE_HEIGHT,
};
use crate::theme::{ThemeState, resolve_style};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::Style;
use ratatui::widgets::Block;

/// Rectangles drawn by one dashboard frame, for hit testing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardLayout {
    pub toggle: Rect,
    pub metric_cards: Vec<Rect>,
    pub follower_cards: Vec<Rect>,
    pub distribution_chart: Rect,
    pub breakdown_chart: Rect,
}

/// Column counts for the metric grid, follower grid and chart row.
fn grid_columns(width: u16) -> (u16, u16, u16) {
    if width >= MD_BREAKPOINT_COLS {
        (4, 2, 2)
    } else {
        (1, 1, 1)
    }
}

/// Draw the whole dashboard for `theme` and report where everything went.
pub fn render_dashboard(
    f: &mut Frame,
    state: &DashboardState,
    theme: ThemeState,
) -> DashboardLayout {
    let surface = f.area();

    // The page background follows the root class, not the component flag.
    if state.with_background_color {
        let page = resolve_style(ThemeState {
            is_dark: state.root.is_dark(),
        });
        f.render_widget(
            Block::default().style(
                Style::default()
                    .bg(hex_to_color(page.page_bg))
                    .fg(hex_to_color(page.page_fg)),
            ),
            surface,
        );
    }

    let (metric_cols, follower_cols, chart_cols) = grid_columns(surface.width);
    let data = &state.data;

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TITLE_HEIGHT),
            Constraint::Length(grid_height(
                data.metrics.len(),
                metric_cols,
                METRIC_CARD_HEIGHT,
            )),
            Constraint::Length(GRID_GAP),
            Constraint::Length(grid_height(
                data.audience.len(),
                follower_cols,
                FOLLOWER_CARD_HEIGHT,
            )),
            Constraint::Length(GRID_GAP),
            Constraint::Min(CHART_MIN_HEIGHT),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .horizontal_margin(2)
        .split(surface);

    header::render_header(f, main_chunks[0], theme);

    let metric_cards = grid_cells(
        main_chunks[1],
        data.metrics.len(),
        metric_cols,
        METRIC_CARD_HEIGHT,
    );
    for (metric, area) in data.metrics.iter().zip(&metric_cards) {
        metric_card::render_metric_card(f, *area, metric, theme);
    }

    let follower_cards = grid_cells(
        main_chunks[3],
        data.audience.len(),
        follower_cols,
        FOLLOWER_CARD_HEIGHT,
    );
    for (index, (platform, area)) in data.audience.iter().zip(&follower_cards).enumerate() {
        follower_card::render_follower_card(f, *area, platform, state.logo(index), theme);
    }

    let chart_chunks = Layout::default()
        .direction(if chart_cols > 1 {
            Direction::Horizontal
        } else {
            Direction::Vertical
        })
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .spacing(GRID_GAP)
        .split(main_chunks[5]);

    distribution_chart::render_distribution_chart(
        f,
        chart_chunks[0],
        data.audience,
        theme,
        state.hover,
    );
    breakdown_chart::render_breakdown_chart(
        f,
        chart_chunks[1],
        data.breakdown,
        theme,
        state.hover,
    );

    footer::render_footer(f, main_chunks[6], theme);

    // Last, so it stays on top of everything else.
    let toggle = theme_toggle::render_theme_toggle(f, surface, theme);

    DashboardLayout {
        toggle,
        metric_cards,
        follower_cards,
        distribution_chart: chart_chunks[0],
        breakdown_chart: chart_chunks[1],
    }
}
