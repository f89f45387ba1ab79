//! Reusable rendering helpers shared by screens.

pub mod carousel;
pub mod pager;

use ratatui::layout::Rect;

/// A `width` × `height` rect centered in `area`, clamped to fit.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
