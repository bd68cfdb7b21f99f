//! Completion screen shown after the last lab.

use ratatui::layout::{Alignment, Constraint, Layout};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use super::progress_header;
use crate::app::App;
use crate::ui::centered_rect;
use crate::ui::theme::ThemeExt;

pub fn render(frame: &mut Frame, app: &App) {
    let [header, body] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(10)]).areas(frame.area());

    // Header pins to 100% here via the completed flag.
    progress_header(frame, header, app);

    let area = centered_rect(body, 56, 12);
    let lines = vec![
        Line::styled("Well done!", app.theme.success_style()).alignment(Alignment::Center),
        Line::raw(""),
        Line::styled(
            "You have worked through all seven optics labs.",
            app.theme.text_style(),
        )
        .alignment(Alignment::Center),
        Line::raw(""),
        Line::from(vec![
            Span::styled("r", app.theme.accent_style()),
            Span::styled(" restart from the beginning", app.theme.text_style()),
        ]),
        Line::from(vec![
            Span::styled("f", app.theme.accent_style()),
            Span::styled(" explore the labs freely", app.theme.text_style()),
        ]),
        Line::from(vec![
            Span::styled("s", app.theme.accent_style()),
            Span::styled(" take the quiz", app.theme.text_style()),
        ]),
        Line::from(vec![
            Span::styled("q", app.theme.accent_style()),
            Span::styled(" quit", app.theme.text_style()),
        ]),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(app.theme.border_style())
            .title("All labs complete"),
    );

    frame.render_widget(paragraph, area);
}
