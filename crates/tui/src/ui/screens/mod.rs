//! Screen rendering functions, one module per screen.

pub mod completion;
pub mod lab;
pub mod quiz;
pub mod welcome;

use ratatui::layout::Rect;
use ratatui::widgets::{Block, Borders, Gauge};
use ratatui::Frame;

use crate::app::App;
use crate::ui::theme::ThemeExt;

/// Draws the shared progress header.
///
/// The gauge counts fully passed labs; once the curriculum is complete
/// it is pinned to 100% with a done label.
pub(crate) fn progress_header(frame: &mut Frame, area: Rect, app: &App) {
    let (ratio, label) = if app.completed {
        (1.0, "Done!".to_string())
    } else if app.navigator.is_free_explore() {
        let name = app.navigator.current_descriptor().display_name;
        (1.0, format!("Free exploration: {name}"))
    } else {
        (
            app.navigator.progress_percent() / 100.0,
            app.navigator.progress_label(),
        )
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(app.theme.border_style())
                .title("Progress"),
        )
        .gauge_style(app.theme.progress_style())
        .ratio(ratio)
        .label(label);

    frame.render_widget(gauge, area);
}
