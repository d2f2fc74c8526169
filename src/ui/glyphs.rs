//! Named glyph set used by cards and the theme toggle.

use ratatui::style::{Color, Style};
use ratatui::text::Span;
use serde::Serialize;

/// The fixed set of icons the dashboard draws.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, strum::Display, strum::EnumIter)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Glyph {
    TrendUp,
    Sun,
    Moon,
    People,
    Message,
    Heart,
    Share,
}

/// How large a glyph is drawn. Terminal cells only allow a padded variant.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum GlyphSize {
    Small,
    Large,
}

impl Glyph {
    /// Single-column symbol for the glyph.
    pub fn symbol(self) -> &'static str {
        match self {
            Glyph::TrendUp => "↗",
            Glyph::Sun => "☀",
            Glyph::Moon => "☾",
            Glyph::People => "☺",
            Glyph::Message => "✉",
            Glyph::Heart => "♥",
            Glyph::Share => "⇪",
        }
    }

    /// Render the glyph at `size` in `color`.
    pub fn span(self, size: GlyphSize, color: Color) -> Span<'static> {
        let text = match size {
            GlyphSize::Small => self.symbol().to_string(),
            GlyphSize::Large => format!(" {} ", self.symbol()),
        };
        Span::styled(text, Style::default().fg(color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    #[test]
    fn test_symbols_are_distinct() {
        let symbols: HashSet<&str> = Glyph::iter().map(Glyph::symbol).collect();
        assert_eq!(symbols.len(), Glyph::iter().count());
    }

    #[test]
    fn test_large_glyph_is_padded() {
        let span = Glyph::Moon.span(GlyphSize::Large, Color::White);
        assert_eq!(span.content, " ☾ ");
        assert_eq!(span.style.fg, Some(Color::White));
    }

    #[test]
    fn test_display_uses_kebab_case_names() {
        assert_eq!(Glyph::TrendUp.to_string(), "trend-up");
    }
}
