//! Quiz screen: review questions over the full curriculum.

use ratatui::layout::{Constraint, Layout};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::App;
use crate::ui::theme::ThemeExt;

const QUESTIONS: &[&str] = &[
    "Where does the image of an object in a plane mirror appear, and is it real or virtual?",
    "What happens to rays parallel to the axis when they hit a concave mirror?",
    "Why do cars use convex mirrors on the passenger side?",
    "State the thin-lens formula and name each quantity in it.",
    "Which way does light bend when it passes from air into glass?",
    "What condition must hold for total internal reflection to occur?",
    "Why does a prism split white light into a spectrum?",
];

pub fn render(frame: &mut Frame, app: &App) {
    let [body, footer] =
        Layout::vertical([Constraint::Min(10), Constraint::Length(1)]).areas(frame.area());

    let mut lines = vec![
        Line::styled(
            "Check your understanding. Discuss or write down an answer,",
            app.theme.text_style(),
        ),
        Line::styled(
            "then revisit the matching lab if you are unsure.",
            app.theme.text_style(),
        ),
        Line::raw(""),
    ];
    for (i, question) in QUESTIONS.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!("{}. ", i + 1), app.theme.accent_style()),
            Span::styled(*question, app.theme.text_style()),
        ]));
        lines.push(Line::raw(""));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(app.theme.border_style())
                .title("Quiz"),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, body);

    frame.render_widget(
        Paragraph::new(Line::styled(
            "b back  f free exploration  t theme  q quit",
            app.theme.dim_style(),
        )),
        footer,
    );
}
