//! UI helper functions

use ratatui::layout::Rect;

/// A rect of at most `width` columns, horizontally centered in `area`
pub fn center_horizontally(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

/// A rect of at most `height` rows, vertically centered in `area`
pub fn center_vertically(area: Rect, height: u16) -> Rect {
    let height = height.min(area.height);
    Rect {
        y: area.y + (area.height - height) / 2,
        height,
        ..area
    }
}
