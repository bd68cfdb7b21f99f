//! Theme types shared across the workspace.
//!
//! Responsibilities:
//! - Define the persisted `ColorTheme` flag (the single durable preference).
//! - Expand that flag into a full runtime `Theme` palette.
//!
//! Does NOT handle:
//! - Disk persistence (see `persistence`).
//! - Style construction helpers (see the TUI crate's `ui::theme`).

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fmt;

/// User-selectable color theme.
///
/// This is persisted to disk via `PersistedState` and expanded into a full
/// `Theme` at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ColorTheme {
    #[default]
    Light,
    Dark,
}

impl ColorTheme {
    /// Human-readable display name for UI surfaces.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }

    /// The other theme (used by the theme-toggle key).
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Whether this theme is the dark variant.
    ///
    /// Lab modules receive this as their dark-mode flag.
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Parse a theme name as given on the command line.
    pub fn from_cli_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

impl fmt::Display for ColorTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Expanded runtime theme.
///
/// Invariants:
/// - This is intentionally **not serialized**. Persist `ColorTheme` and
///   expand on startup.
/// - Colors should be semantically meaningful (accent/success/disabled).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    // Global / chrome
    pub background: Color,
    pub text: Color,
    pub text_dim: Color,
    pub border: Color,
    pub title: Color,
    pub accent: Color,

    // Selection / highlight
    pub highlight_fg: Color,
    pub highlight_bg: Color,

    // Semantics
    pub success: Color,
    pub warning: Color,
    pub disabled: Color,

    // Progress bar
    pub progress_fill: Color,
    pub progress_track: Color,

    // Lab canvas
    pub canvas_ray: Color,
    pub canvas_object: Color,
    pub canvas_axis: Color,
}

impl Theme {
    /// Expand a persisted `ColorTheme` into a full runtime palette.
    pub fn from_color_theme(theme: ColorTheme) -> Self {
        match theme {
            ColorTheme::Light => Self {
                background: Color::White,
                text: Color::Black,
                text_dim: Color::Gray,
                border: Color::Blue,
                title: Color::Blue,
                accent: Color::Magenta,

                highlight_fg: Color::Black,
                highlight_bg: Color::Gray,

                success: Color::Green,
                warning: Color::Yellow,
                disabled: Color::Gray,

                progress_fill: Color::Blue,
                progress_track: Color::Gray,

                canvas_ray: Color::Red,
                canvas_object: Color::Blue,
                canvas_axis: Color::Gray,
            },
            ColorTheme::Dark => Self {
                background: Color::Black,
                text: Color::White,
                text_dim: Color::Gray,
                border: Color::Indexed(110), // soft blue/cyan
                title: Color::Indexed(110),
                accent: Color::Indexed(214), // orange-ish

                highlight_fg: Color::White,
                highlight_bg: Color::Indexed(236),

                success: Color::Green,
                warning: Color::Yellow,
                disabled: Color::DarkGray,

                progress_fill: Color::Indexed(110),
                progress_track: Color::Indexed(236),

                canvas_ray: Color::Indexed(203),
                canvas_object: Color::Indexed(75),
                canvas_axis: Color::DarkGray,
            },
        }
    }
}

impl From<ColorTheme> for Theme {
    fn from(value: ColorTheme) -> Self {
        Self::from_color_theme(value)
    }
}

impl Default for Theme {
    fn default() -> Self {
        ColorTheme::Light.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_theme_default_is_light() {
        assert_eq!(ColorTheme::default(), ColorTheme::Light);
    }

    #[test]
    fn test_color_theme_toggle_round_trips() {
        assert_eq!(ColorTheme::Light.toggle(), ColorTheme::Dark);
        assert_eq!(ColorTheme::Dark.toggle(), ColorTheme::Light);
        assert_eq!(ColorTheme::Light.toggle().toggle(), ColorTheme::Light);
    }

    #[test]
    fn test_is_dark() {
        assert!(!ColorTheme::Light.is_dark());
        assert!(ColorTheme::Dark.is_dark());
    }

    #[test]
    fn test_from_cli_name() {
        assert_eq!(ColorTheme::from_cli_name("light"), Some(ColorTheme::Light));
        assert_eq!(ColorTheme::from_cli_name("DARK"), Some(ColorTheme::Dark));
        assert_eq!(ColorTheme::from_cli_name("solarized"), None);
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&ColorTheme::Dark).unwrap();
        assert_eq!(json, "\"dark\"");
        let back: ColorTheme = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(back, ColorTheme::Light);
    }

    #[test]
    fn test_theme_expansion_differs_per_flag() {
        let light = Theme::from_color_theme(ColorTheme::Light);
        let dark = Theme::from_color_theme(ColorTheme::Dark);
        assert_ne!(light.background, dark.background);
        assert_ne!(light.text, dark.text);
    }
}
