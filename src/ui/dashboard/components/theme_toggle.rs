//! Theme toggle control
//!
//! Fixed to the top-right corner and drawn after everything else.

use crate::consts::cli_consts::layout::{TOGGLE_HEIGHT, TOGGLE_WIDTH};
use crate::theme::{ThemeState, resolve_style};
use crate::ui::dashboard::utils::hex_to_color;
use crate::ui::glyphs::GlyphSize;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};

/// Where the control sits within the full surface.
pub fn toggle_area(surface: Rect) -> Rect {
    let width = TOGGLE_WIDTH.min(surface.width);
    let height = TOGGLE_HEIGHT.min(surface.height);
    Rect::new(surface.right() - width, surface.y, width, height)
}

/// Render the control. The glyph reflects the theme in effect before a click.
pub fn render_theme_toggle(f: &mut Frame, surface: Rect, theme: ThemeState) -> Rect {
    let tokens = resolve_style(theme);
    let area = toggle_area(surface);
    let style = Style::default()
        .bg(hex_to_color(tokens.toggle_bg))
        .fg(hex_to_color(tokens.toggle_fg));

    let glyph = tokens
        .toggle_glyph
        .span(GlyphSize::Large, hex_to_color(tokens.toggle_fg))
        .patch_style(Style::default().add_modifier(Modifier::BOLD));

    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(Line::from(glyph))
            .alignment(Alignment::Center)
            .style(style)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .style(style),
            ),
        area,
    );
    area
}
