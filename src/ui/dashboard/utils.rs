//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::consts::cli_consts::layout::GRID_GAP;
use crate::data::HexColor;
use ratatui::layout::Rect;
use ratatui::prelude::Color;
use std::str::FromStr;

/// Format a count with comma thousands separators (`45210` -> `45,210`).
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Convert a hex token to a terminal colour; unparsable tokens fall back to the
/// terminal default.
pub fn hex_to_color(color: HexColor) -> Color {
    Color::from_str(color.0).unwrap_or(Color::Reset)
}

/// Lay out `count` equally sized cells in rows of `columns`.
///
/// Rows that would extend past the bottom of `area` are clipped or dropped.
pub fn grid_cells(area: Rect, count: usize, columns: u16, row_height: u16) -> Vec<Rect> {
    let columns = columns.max(1);
    let gaps = GRID_GAP * (columns - 1);
    let cell_width = area.width.saturating_sub(gaps) / columns;

    (0..count)
        .map_while(|i| {
            let row = (i / columns as usize) as u16;
            let col = i as u16 % columns;
            let y = area.y + row * (row_height + GRID_GAP);
            if y >= area.bottom() {
                return None;
            }
            let height = row_height.min(area.bottom() - y);
            Some(Rect::new(
                area.x + col * (cell_width + GRID_GAP),
                y,
                cell_width,
                height,
            ))
        })
        .collect()
}

/// Rows needed to show `count` cells in `columns` columns, gaps included.
pub fn grid_height(count: usize, columns: u16, row_height: u16) -> u16 {
    let columns = columns.max(1) as usize;
    let rows = count.div_ceil(columns) as u16;
    if rows == 0 {
        0
    } else {
        rows * row_height + (rows - 1) * GRID_GAP
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(45_210), "45,210");
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(158_200), "158,200");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn test_hex_to_color() {
        assert_eq!(hex_to_color(HexColor("#E1306C")), Color::Rgb(0xE1, 0x30, 0x6C));
        assert_eq!(hex_to_color(HexColor("not-a-colour")), Color::Reset);
    }

    #[test]
    fn test_grid_cells_wrap_into_rows() {
        let cells = grid_cells(Rect::new(0, 0, 41, 20), 4, 2, 5);
        assert_eq!(cells.len(), 4);
        assert_eq!(cells[0], Rect::new(0, 0, 20, 5));
        assert_eq!(cells[1], Rect::new(21, 0, 20, 5));
        assert_eq!(cells[2], Rect::new(0, 6, 20, 5));
    }

    #[test]
    fn test_grid_cells_drop_rows_past_bottom() {
        let cells = grid_cells(Rect::new(0, 0, 20, 8), 4, 1, 5);
        assert_eq!(cells.len(), 2);
        assert_eq!(cells[1].height, 2);
        assert!(grid_cells(Rect::new(0, 0, 20, 8), 0, 1, 5).is_empty());
    }

    #[test]
    fn test_grid_height() {
        assert_eq!(grid_height(4, 4, 5), 5);
        assert_eq!(grid_height(4, 2, 6), 13);
        assert_eq!(grid_height(0, 2, 6), 0);
    }
}
