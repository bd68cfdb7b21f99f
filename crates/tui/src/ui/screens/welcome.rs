//! Welcome screen shown at startup.

use ratatui::layout::Alignment;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::App;
use crate::ui::centered_rect;
use crate::ui::theme::ThemeExt;

pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect(frame.area(), 64, 18);

    let mut lines = vec![
        Line::styled("Optiklab", app.theme.title_style()).alignment(Alignment::Center),
        Line::raw(""),
        Line::styled(
            "An interactive tour through geometric optics.",
            app.theme.text_style(),
        )
        .alignment(Alignment::Center),
        Line::raw(""),
        Line::styled(
            "Seven labs walk you from flat mirrors to prisms. Each lab",
            app.theme.text_style(),
        ),
        Line::styled(
            "starts with guided steps and then opens up for free",
            app.theme.text_style(),
        ),
        Line::styled("experimentation.", app.theme.text_style()),
        Line::raw(""),
    ];

    for row in app.navigator.picker_rows() {
        lines.push(Line::from(vec![
            Span::styled(format!("  {}. ", row.index + 1), app.theme.dim_style()),
            Span::styled(row.name, app.theme.text_style()),
        ]));
    }

    lines.push(Line::raw(""));
    lines.push(
        Line::from(vec![
            Span::styled("Enter", app.theme.accent_style()),
            Span::styled(" start   ", app.theme.dim_style()),
            Span::styled("t", app.theme.accent_style()),
            Span::styled(" theme   ", app.theme.dim_style()),
            Span::styled("q", app.theme.accent_style()),
            Span::styled(" quit", app.theme.dim_style()),
        ])
        .alignment(Alignment::Center),
    );

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(app.theme.border_style()),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}
