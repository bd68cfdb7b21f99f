//! Render dispatch: hands the frame to the active screen.

use ratatui::Frame;

use super::{App, Screen};
use crate::ui::screens;

impl App {
    /// Draws the active screen.
    pub fn render(&self, frame: &mut Frame) {
        match self.screen {
            Screen::Welcome => screens::welcome::render(frame, self),
            Screen::Lab => screens::lab::render(frame, self),
            Screen::Completion => screens::completion::render(frame, self),
            Screen::Quiz => screens::quiz::render(frame, self),
        }
    }
}
