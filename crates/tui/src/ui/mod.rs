//! Rendering layer: screens and style helpers.

pub mod screens;
pub mod theme;

use ratatui::layout::{Constraint, Flex, Layout, Rect};

/// Centers a box of the given size inside `area`, clamped to fit.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [area] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    area
}
