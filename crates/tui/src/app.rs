//! Application state container and update logic.

mod actions;
mod input;
mod render;
mod state;

pub use state::Screen;

use std::time::Instant;

use optiklab_config::{ColorTheme, Theme};

use crate::labs::LabRegistry;
use crate::navigator::Navigator;

/// Top-level application state.
///
/// Owns the navigator, the lab registry and the presentation state the
/// screens read. All mutation happens in [`App::update`].
pub struct App {
    /// Which screen is currently shown.
    pub screen: Screen,
    /// Tutorial navigation state.
    pub navigator: Navigator,
    /// Live lab modules, indexed like the navigator's registry.
    pub registry: LabRegistry,
    /// Persisted theme choice.
    pub color_theme: ColorTheme,
    /// Runtime palette derived from `color_theme`.
    pub theme: Theme,
    /// Whether the full curriculum has been finished this session.
    pub completed: bool,

    /// Last known terminal size, used when activating a lab.
    last_area: Option<(u16, u16)>,
    /// Resize waiting for the debounce interval to elapse.
    pending_resize: Option<(u16, u16)>,
    /// When the pending resize was recorded.
    last_resize_at: Option<Instant>,
}

impl App {
    /// Creates the app on the welcome screen.
    ///
    /// The navigator is built from the registry's descriptors so both
    /// sides index labs identically.
    pub fn new(registry: LabRegistry, color_theme: ColorTheme) -> Self {
        let navigator = Navigator::new(registry.descriptors());
        let theme = Theme::from(color_theme);
        Self {
            screen: Screen::Welcome,
            navigator,
            registry,
            color_theme,
            theme,
            completed: false,
            last_area: None,
            pending_resize: None,
            last_resize_at: None,
        }
    }
}
