//! Metric card component
//!
//! One headline statistic with its icon and a static change indicator.

use super::card_block;
use crate::data::MetricSpec;
use crate::theme::{ThemeState, resolve_style};
use crate::ui::dashboard::utils::hex_to_color;
use crate::ui::glyphs::{Glyph, GlyphSize};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

/// Render a metric card.
///
/// The change indicator is always drawn as an upward, positive trend; its
/// text is shown verbatim whatever its sign.
pub fn render_metric_card(f: &mut Frame, area: Rect, metric: &MetricSpec, theme: ThemeState) {
    let tokens = resolve_style(theme);
    let positive = Style::default().fg(hex_to_color(tokens.positive_fg));

    let lines = vec![
        Line::from(vec![
            metric.glyph.span(GlyphSize::Large, hex_to_color(metric.glyph_color)),
            Span::styled(
                metric.label,
                Style::default().fg(hex_to_color(tokens.muted_fg)),
            ),
        ]),
        Line::from(vec![
            Span::raw("   "),
            Span::styled(
                metric.value,
                Style::default()
                    .fg(hex_to_color(tokens.value_fg))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Glyph::TrendUp.span(GlyphSize::Small, hex_to_color(tokens.positive_fg)),
            Span::styled(format!(" {}", metric.change.0), positive),
        ]),
    ];

    let card = Paragraph::new(lines)
        .style(Style::default().fg(hex_to_color(tokens.card_fg)))
        .block(card_block(&tokens, None));
    f.render_widget(card, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{KEY_METRICS, PlaceholderTrend};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::prelude::Color;

    fn draw(theme: ThemeState, change: &'static str) -> Terminal<TestBackend> {
        let metric = MetricSpec {
            change: PlaceholderTrend(change),
            ..KEY_METRICS[0]
        };
        let mut terminal = Terminal::new(TestBackend::new(40, 5)).unwrap();
        terminal
            .draw(|f| render_metric_card(f, f.area(), &metric, theme))
            .unwrap();
        terminal
    }

    fn text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_card_shows_label_value_and_change() {
        let terminal = draw(ThemeState::default(), "+12.5%");
        let text = text(&terminal);
        assert!(text.contains("Total Followers"));
        assert!(text.contains("158,200"));
        assert!(text.contains("↗ +12.5%"));
    }

    #[test]
    // A negative change is still drawn with the positive colour.
    fn test_negative_change_keeps_positive_styling() {
        let terminal = draw(ThemeState::default(), "-3.0%");
        let buf = terminal.backend().buffer();
        let minus = buf
            .content
            .iter()
            .find(|c| c.symbol() == "-")
            .expect("change text rendered");
        assert_eq!(minus.fg, Color::Rgb(0x16, 0xA3, 0x4A));
    }

    #[test]
    fn test_card_background_follows_theme() {
        let light = draw(ThemeState { is_dark: false }, "+1%");
        let dark = draw(ThemeState { is_dark: true }, "+1%");
        let inner: (u16, u16) = (5, 2);
        assert_eq!(light.backend().buffer()[inner].bg, Color::Rgb(0xFF, 0xFF, 0xFF));
        assert_eq!(dark.backend().buffer()[inner].bg, Color::Rgb(0x1F, 0x29, 0x37));
    }
}
