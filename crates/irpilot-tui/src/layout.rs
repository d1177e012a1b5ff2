//! Screen layout areas

use ratatui::layout::{Constraint, Layout, Rect};

/// Top-level screen areas: header bar, main body, status line.
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    pub header: Rect,
    pub body: Rect,
    pub status: Rect,
}

/// Split the terminal into header / body / status.
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        body: chunks[1],
        status: chunks[2],
    }
}
