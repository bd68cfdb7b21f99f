//! Lab screen: the interactive area plus guided or free-mode chrome.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};
use ratatui::Frame;

use super::progress_header;
use crate::app::App;
use crate::navigator::FreeModeCta;
use crate::ui::theme::ThemeExt;

pub fn render(frame: &mut Frame, app: &App) {
    let [header, body, panel, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(10),
        Constraint::Length(7),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    progress_header(frame, header, app);

    let index = app.navigator.current_lab();
    app.registry.module(index).render(frame, body, &app.theme);

    if app.navigator.is_free_explore() {
        render_picker(frame, panel, app);
    } else if let Some(display) = app.navigator.step_display() {
        render_guided_panel(frame, panel, app, &display);
    } else {
        render_free_indicator(frame, panel, app);
    }

    render_footer(frame, footer, app);
}

fn render_guided_panel(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    display: &crate::navigator::StepDisplay,
) {
    let next_hint = if display.next_is_finish {
        "finish guide"
    } else {
        "next"
    };
    let prev_style = if display.prev_enabled {
        app.theme.accent_style()
    } else {
        app.theme.disabled_style()
    };

    let lines = vec![
        Line::styled(&*display.text, app.theme.text_style()),
        Line::raw(""),
        Line::from(vec![
            Span::styled("\u{2190}", prev_style),
            Span::styled(" previous   ", app.theme.dim_style()),
            Span::styled("\u{2192}", app.theme.accent_style()),
            Span::styled(format!(" {next_hint}"), app.theme.dim_style()),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(app.theme.border_style())
                .title(format!("{} ({})", display.title, display.indicator)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn render_free_indicator(frame: &mut Frame, area: Rect, app: &App) {
    let cta = match app.navigator.free_mode_cta() {
        FreeModeCta::ContinueTo { next_name } => {
            format!("Enter: continue to {next_name}")
        }
        FreeModeCta::FinishAll => "Enter: finish all labs".to_string(),
    };

    let name = app.navigator.current_descriptor().display_name;
    let lines = vec![
        Line::styled(
            "Free mode: experiment as long as you like.",
            app.theme.text_style(),
        ),
        Line::raw(""),
        Line::styled(cta, app.theme.accent_style()),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(app.theme.border_style())
            .title(format!("{name} (free mode)")),
    );

    frame.render_widget(paragraph, area);
}

fn render_picker(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .navigator
        .picker_rows()
        .into_iter()
        .map(|row| {
            let marker = if row.active { "\u{25b6} " } else { "  " };
            let style = if row.active {
                app.theme.highlight_style()
            } else {
                app.theme.text_style()
            };
            ListItem::new(Line::styled(
                format!("{marker}{}. {}", row.index + 1, row.name),
                style,
            ))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(app.theme.border_style())
            .title("Free exploration: choose a lab"),
    );

    frame.render_widget(list, area);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let hints = if app.navigator.is_free_explore() {
        "\u{2190}/\u{2192} switch lab  1-7 jump  r restart  t theme  q quit"
    } else {
        "t theme  q quit"
    };
    frame.render_widget(
        Paragraph::new(Line::styled(hints, app.theme.dim_style())),
        area,
    );
}
