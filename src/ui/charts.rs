//! Chart rendering.
//!
//! Two capabilities are exposed to the dashboard: a categorical bar series and
//! a proportional ring series. Callers supply data and colours; geometry,
//! drawing and hover hit-testing live here.

use crate::consts::cli_consts::charts::{BAR_GAP, BAR_WIDTH, CELL_ASPECT};
use crate::ui::dashboard::utils::group_thousands;
use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Clear, Paragraph, Widget};

/// Colours of a hover tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TooltipStyle {
    pub bg: Color,
    pub fg: Color,
}

/// Style overrides for a bar series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarSeriesStyle {
    pub fill: Color,
    pub axis_tick: Color,
    pub tooltip: TooltipStyle,
}

/// Width of the y-axis gutter left of the bars.
const Y_AXIS_WIDTH: u16 = 8;

/// Render `(label, value)` pairs as vertical bars in the given order.
///
/// An empty series draws only the axis gutter.
pub fn render_bar_series(
    f: &mut Frame,
    area: Rect,
    series: &[(&str, u64)],
    style: BarSeriesStyle,
    hover: Option<Position>,
) {
    let [axis_area, plot_area] = split_y_axis(area);

    let max = series.iter().map(|(_, v)| *v).max().unwrap_or(0);
    let tick_style = Style::default().fg(style.axis_tick);
    let mut ticks = vec![Line::styled(group_thousands(max), tick_style)];
    ticks.resize(axis_area.height.saturating_sub(2) as usize, Line::default());
    ticks.push(Line::styled("0", tick_style));
    f.render_widget(Paragraph::new(ticks).right_aligned(), axis_area);

    let bars: Vec<Bar> = series
        .iter()
        .map(|(label, value)| {
            Bar::default()
                .value(*value)
                .text_value(group_thousands(*value))
                .label(Line::from(*label))
        })
        .collect();

    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(BAR_WIDTH)
        .bar_gap(BAR_GAP)
        .bar_style(Style::default().fg(style.fill))
        .value_style(
            Style::default()
                .fg(Color::White)
                .bg(style.fill)
                .add_modifier(Modifier::BOLD),
        )
        .label_style(tick_style);
    f.render_widget(chart, plot_area);

    if let Some(pos) = hover {
        if let Some(index) = bar_at(area, series.len(), pos) {
            let (label, value) = series[index];
            let text = format!("{}: {}", label, group_thousands(value));
            render_tooltip(f, area, pos, &text, style.tooltip);
        }
    }
}

fn split_y_axis(area: Rect) -> [Rect; 2] {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(Y_AXIS_WIDTH), Constraint::Fill(1)])
        .split(area);
    [chunks[0], chunks[1]]
}

/// Column rectangles of `count` bars drawn by [`render_bar_series`] into `area`.
///
/// Bars that do not fit horizontally are left out.
pub fn bar_columns(area: Rect, count: usize) -> Vec<Rect> {
    let [_, plot] = split_y_axis(area);
    (0..count)
        .map(|i| plot.x + i as u16 * (BAR_WIDTH + BAR_GAP))
        .take_while(|x| x + BAR_WIDTH <= plot.right())
        .map(|x| Rect::new(x, plot.y, BAR_WIDTH, plot.height))
        .collect()
}

/// Index of the bar under `pos`, if any.
pub fn bar_at(area: Rect, count: usize, pos: Position) -> Option<usize> {
    bar_columns(area, count)
        .iter()
        .position(|column| column.contains(pos))
}

/// Sweep of each value as degrees of a full circle.
///
/// Negative values count as zero; a zero total yields zero-width wedges.
pub fn wedge_sweeps(values: &[f64]) -> Vec<f64> {
    let total: f64 = values.iter().map(|v| v.max(0.0)).sum();
    values
        .iter()
        .map(|v| {
            if total > 0.0 {
                v.max(0.0) / total * 360.0
            } else {
                0.0
            }
        })
        .collect()
}

/// Ring (donut) chart widget.
///
/// Wedges run clockwise from twelve o'clock in slice order.
#[derive(Debug, Clone)]
pub struct Ring<'a> {
    wedges: &'a [(&'a str, f64, Color)],
    inner_ratio: f64,
    outline: Color,
}

impl<'a> Ring<'a> {
    pub fn new(wedges: &'a [(&'a str, f64, Color)], inner_ratio: f64, outline: Color) -> Self {
        Self {
            wedges,
            inner_ratio,
            outline,
        }
    }
}

/// Angle in degrees (clockwise from twelve o'clock) of the ring cell under
/// `pos`, or `None` when `pos` lies in the hole or outside the ring.
fn ring_angle(area: Rect, pos: Position, inner_ratio: f64) -> Option<f64> {
    if area.is_empty() || !area.contains(pos) {
        return None;
    }
    let outer = (f64::from(area.width) / 2.0).min(f64::from(area.height) * CELL_ASPECT / 2.0);
    let cx = f64::from(area.x) + f64::from(area.width) / 2.0;
    let cy = f64::from(area.y) + f64::from(area.height) / 2.0;
    let dx = f64::from(pos.x) + 0.5 - cx;
    let dy = (f64::from(pos.y) + 0.5 - cy) * CELL_ASPECT;
    let r = dx.hypot(dy);
    if r > outer || r < outer * inner_ratio {
        return None;
    }
    let degrees = dx.atan2(-dy).to_degrees();
    Some(if degrees < 0.0 { degrees + 360.0 } else { degrees })
}

fn wedge_for_angle(sweeps: &[f64], angle: f64) -> Option<usize> {
    let mut end = 0.0;
    for (i, sweep) in sweeps.iter().enumerate() {
        end += sweep;
        if *sweep > 0.0 && angle < end {
            return Some(i);
        }
    }
    None
}

/// Index of the wedge under `pos` in a ring drawn into `area`.
pub fn wedge_at(area: Rect, values: &[f64], inner_ratio: f64, pos: Position) -> Option<usize> {
    let angle = ring_angle(area, pos, inner_ratio)?;
    wedge_for_angle(&wedge_sweeps(values), angle)
}

impl Widget for Ring<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let values: Vec<f64> = self.wedges.iter().map(|(_, v, _)| *v).collect();
        let sweeps = wedge_sweeps(&values);
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                let pos = Position::new(x, y);
                let Some(angle) = ring_angle(area, pos, self.inner_ratio) else {
                    continue;
                };
                let Some(cell) = buf.cell_mut(pos) else {
                    continue;
                };
                match wedge_for_angle(&sweeps, angle) {
                    Some(i) => {
                        cell.set_symbol("█").set_fg(self.wedges[i].2);
                    }
                    None => {
                        cell.set_symbol("·").set_fg(self.outline);
                    }
                }
            }
        }
    }
}

/// Render `(label, value, color)` triples as a proportional ring.
pub fn render_ring_series(
    f: &mut Frame,
    area: Rect,
    series: &[(&str, f64, Color)],
    inner_ratio: f64,
    outline: Color,
    tooltip: TooltipStyle,
    hover: Option<Position>,
) {
    f.render_widget(Ring::new(series, inner_ratio, outline), area);

    let values: Vec<f64> = series.iter().map(|(_, v, _)| *v).collect();
    if let Some(pos) = hover {
        if let Some(index) = wedge_at(area, &values, inner_ratio, pos) {
            let (label, value, _) = series[index];
            render_tooltip(f, area, pos, &format!("{}: {}", label, value), tooltip);
        }
    }
}

/// Draw a bordered tooltip next to `anchor`, kept inside `bounds`.
fn render_tooltip(f: &mut Frame, bounds: Rect, anchor: Position, text: &str, style: TooltipStyle) {
    let width = (text.chars().count() as u16 + 4).min(bounds.width);
    let height = 3.min(bounds.height);
    let x = (anchor.x + 1).min(bounds.right().saturating_sub(width));
    let y = anchor.y.saturating_sub(height).max(bounds.y);
    let popup = Rect::new(x, y, width, height);

    let colors = Style::default().bg(style.bg).fg(style.fg);
    f.render_widget(Clear, popup);
    f.render_widget(
        Paragraph::new(text.to_string())
            .style(colors)
            .block(Block::default().borders(Borders::ALL).style(colors)),
        popup,
    );
}
