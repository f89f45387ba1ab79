//! Slide indicator dots and pointer geometry for carousels.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};

use hisi_core::PlayState;

use crate::theme::Theme;

/// Logical pixels one terminal column stands for when measuring a drag.
pub const COLUMN_PX: f32 = 8.0;

/// Each dot plus its trailing space.
const DOT_WIDTH: u16 = 2;

pub fn column_px(column: u16) -> f32 {
    f32::from(column) * COLUMN_PX
}

pub fn dots_line(len: usize, index: usize, theme: &Theme) -> Line<'static> {
    let spans = (0..len)
        .map(|i| {
            if i == index {
                Span::styled("● ", theme.heading())
            } else {
                Span::styled("○ ", theme.muted())
            }
        })
        .collect::<Vec<_>>();
    Line::from(spans)
}

/// Which dot, if any, sits under `column` when the dots start at
/// `row.x`.
pub fn dot_at(row: Rect, column: u16, len: usize) -> Option<usize> {
    if column < row.x || column >= row.x + row.width {
        return None;
    }
    let index = usize::from((column - row.x) / DOT_WIDTH);
    (index < len).then_some(index)
}

pub fn play_marker(state: PlayState) -> &'static str {
    match state {
        PlayState::Playing => "▶",
        PlayState::Paused => "❚❚",
    }
}
