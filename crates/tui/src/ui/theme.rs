//! Style helpers over the shared theme palette.
//!
//! The palette itself lives in `optiklab-config` so it can sit next to
//! the persisted theme choice; this extension trait turns palette
//! colors into ratatui styles at the point of use.

use optiklab_config::Theme;
use ratatui::style::{Modifier, Style};

/// Ratatui style accessors for [`Theme`].
pub trait ThemeExt {
    /// Regular body text.
    fn text_style(&self) -> Style;
    /// De-emphasized text, e.g. key hints.
    fn dim_style(&self) -> Style;
    /// Block borders.
    fn border_style(&self) -> Style;
    /// Block and screen titles.
    fn title_style(&self) -> Style;
    /// Accented interactive text.
    fn accent_style(&self) -> Style;
    /// The selected row of a list.
    fn highlight_style(&self) -> Style;
    /// Positive feedback.
    fn success_style(&self) -> Style;
    /// Inactive or unavailable controls.
    fn disabled_style(&self) -> Style;
    /// The filled part of the progress gauge.
    fn progress_style(&self) -> Style;
}

impl ThemeExt for Theme {
    fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    fn dim_style(&self) -> Style {
        Style::default().fg(self.text_dim)
    }

    fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    fn title_style(&self) -> Style {
        Style::default().fg(self.title).add_modifier(Modifier::BOLD)
    }

    fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    fn highlight_style(&self) -> Style {
        Style::default()
            .fg(self.highlight_fg)
            .bg(self.highlight_bg)
            .add_modifier(Modifier::BOLD)
    }

    fn success_style(&self) -> Style {
        Style::default().fg(self.success).add_modifier(Modifier::BOLD)
    }

    fn disabled_style(&self) -> Style {
        Style::default().fg(self.disabled)
    }

    fn progress_style(&self) -> Style {
        Style::default().fg(self.progress_fill).bg(self.progress_track)
    }
}
