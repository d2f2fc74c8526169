//! Platform follower card component
//!
//! Logo badge, platform name and follower count for one platform.

use super::card_block;
use crate::data::{FOLLOWER_TREND, PlatformAudience};
use crate::theme::{ThemeState, resolve_style};
use crate::ui::dashboard::utils::{group_thousands, hex_to_color};
use crate::ui::glyphs::{Glyph, GlyphSize};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use std::path::Path;

/// Empty circle drawn when the logo could not be resolved.
const EMPTY_LOGO: &str = "( )";

/// Circled initial standing in for a resolved logo image.
fn logo_badge(platform_name: &str) -> String {
    platform_name
        .chars()
        .next()
        .map(|c| c.to_ascii_uppercase())
        .filter(char::is_ascii_uppercase)
        .and_then(|c| char::from_u32(0x24B6 + (c as u32 - 'A' as u32)))
        .unwrap_or('●')
        .to_string()
}

/// Render one platform's follower card. `logo` is the resolved logo file, if any.
pub fn render_follower_card(
    f: &mut Frame,
    area: Rect,
    platform: &PlatformAudience,
    logo: Option<&Path>,
    theme: ThemeState,
) {
    let tokens = resolve_style(theme);
    let accent = hex_to_color(platform.accent_color);

    let badge = match logo {
        Some(_) => Span::styled(
            logo_badge(platform.platform_name),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ),
        None => Span::styled(EMPTY_LOGO, Style::default().fg(accent)),
    };

    let lines = vec![
        Line::from(vec![
            Span::raw(" "),
            badge,
            Span::raw("  "),
            Span::styled(
                format!("{} Followers", platform.platform_name),
                Style::default()
                    .fg(hex_to_color(tokens.card_heading_fg))
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::default(),
        Line::from(vec![
            Span::raw(" "),
            Span::styled(
                group_thousands(platform.follower_count),
                Style::default()
                    .fg(hex_to_color(tokens.value_fg))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Glyph::TrendUp.span(GlyphSize::Small, hex_to_color(tokens.positive_fg)),
            Span::styled(
                format!(" {}", FOLLOWER_TREND.0),
                Style::default().fg(hex_to_color(tokens.positive_fg)),
            ),
        ]),
    ];

    let card = Paragraph::new(lines).block(card_block(&tokens, Some(accent)));
    f.render_widget(card, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::AUDIENCE_DATA;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;

    fn draw(logo: Option<&Path>, theme: ThemeState) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(40, 6)).unwrap();
        terminal
            .draw(|f| render_follower_card(f, f.area(), &AUDIENCE_DATA[1], logo, theme))
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn render(logo: Option<&Path>) -> String {
        draw(logo, ThemeState::default())
            .content
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_follower_count_is_grouped() {
        let text = render(None);
        assert!(text.contains("45,210"));
        assert!(!text.contains("45210"));
        assert!(text.contains("Facebook Followers"));
        assert!(text.contains("+8.5%"));
    }

    #[test]
    // A missing logo degrades to an empty circle.
    fn test_missing_logo_renders_empty_circle() {
        assert!(render(None).contains(EMPTY_LOGO));
        let resolved = render(Some(Path::new("assets/facebook.png")));
        assert!(resolved.contains("Ⓕ"));
        assert!(!resolved.contains(EMPTY_LOGO));
    }

    #[test]
    fn test_logo_badge_falls_back_for_non_latin_names() {
        assert_eq!(logo_badge("linkedin"), "Ⓛ");
        assert_eq!(logo_badge("微博"), "●");
        assert_eq!(logo_badge(""), "●");
    }

    #[test]
    // Card background and heading colour come from the active branch.
    fn test_card_colors_follow_theme() {
        for theme in [ThemeState { is_dark: false }, ThemeState { is_dark: true }] {
            let tokens = resolve_style(theme);
            let buf = draw(None, theme);

            let blank: (u16, u16) = (30, 2);
            assert_eq!(buf[blank].bg, hex_to_color(tokens.card_bg));

            let heading = buf
                .content
                .iter()
                .find(|c| c.symbol() == "F")
                .expect("heading rendered");
            assert_eq!(heading.fg, hex_to_color(tokens.card_heading_fg));
            assert_eq!(heading.bg, hex_to_color(tokens.card_bg));
        }
        assert_ne!(
            draw(None, ThemeState { is_dark: true })[(30u16, 2u16)].bg,
            draw(None, ThemeState { is_dark: false })[(30u16, 2u16)].bg
        );
    }
}
