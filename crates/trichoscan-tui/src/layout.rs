//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Header (title, status, key hints)
    pub header: Rect,

    /// Phase panel
    pub body: Rect,

    /// One-line notice bar
    pub footer: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header (glass container)
        Constraint::Min(3),    // Body
        Constraint::Length(1), // Notice
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        body: chunks[1],
        footer: chunks[2],
    }
}

/// Center a box of at most `width` x `height` inside `area`
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
