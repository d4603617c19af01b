// UI utilities
use ratatui::layout::Rect;

/// A `width` x `height` rectangle centered in `area`, shrunk to fit
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;

    Rect {
        x,
        y,
        width,
        height,
    }
}
