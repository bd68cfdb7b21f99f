//! Action handling: the single place application state changes.

use std::time::{Duration, Instant};

use optiklab_config::constants::RESIZE_DEBOUNCE_MS;
use optiklab_config::Theme;

use super::{App, Screen};
use crate::action::Action;
use crate::navigator::LabTransition;

impl App {
    /// Applies `action` and optionally returns a follow-up action.
    ///
    /// The follow-up is fed back into the event loop, so handlers stay
    /// small and compose through the same dispatch.
    pub fn update(&mut self, action: Action) -> Option<Action> {
        match action {
            Action::Input(key) => return self.map_key(key),
            Action::Resize(width, height) => self.record_resize(width, height),
            Action::Tick => self.apply_pending_resize(),

            Action::StartLab(index) => {
                self.navigator.start_lab(index);
                self.completed = false;
                self.screen = Screen::Lab;
                self.activate_current_lab();
            }
            Action::NextStep => {
                let transition = self.navigator.advance();
                tracing::debug!(?transition, "guided step advanced");
            }
            Action::PreviousStep => {
                self.navigator.retreat();
            }
            Action::ContinueToNextLab => match self.navigator.advance_lab() {
                LabTransition::Started(index) => {
                    tracing::info!(lab = index, "next lab started");
                    self.activate_current_lab();
                }
                LabTransition::AllComplete => {
                    tracing::info!("curriculum finished");
                    self.completed = true;
                    self.screen = Screen::Completion;
                }
            },
            Action::Restart => {
                self.navigator.restart();
                self.completed = false;
                self.screen = Screen::Lab;
                self.activate_current_lab();
            }

            Action::StartQuiz => self.screen = Screen::Quiz,
            Action::BackToCompletion => self.screen = Screen::Completion,

            Action::EnterFreeExplore => {
                self.navigator.enter_free_explore();
                self.completed = false;
                self.screen = Screen::Lab;
                self.activate_current_lab();
            }
            Action::SwitchToLab(index) => {
                self.navigator.switch_to_lab(index);
                self.activate_current_lab();
            }

            Action::ToggleTheme => {
                self.color_theme = self.color_theme.toggle();
                self.theme = Theme::from(self.color_theme);
                self.registry.broadcast_dark_mode(self.color_theme.is_dark());
                return Some(Action::PersistState);
            }

            // Handled by the event loop, which owns the config manager.
            Action::PersistState | Action::Quit => {}
        }
        None
    }

    /// Pushes the current size and theme into the active lab module.
    ///
    /// Called on every lab activation so a lab that was never shown
    /// before still receives its geometry.
    fn activate_current_lab(&mut self) {
        let index = self.navigator.current_lab();
        if let Some((width, height)) = self.last_area {
            self.registry.module_mut(index).resize(width, height);
        }
        let dark = self.color_theme.is_dark();
        self.registry.module_mut(index).set_dark_mode(dark);
    }

    /// Records a resize without applying it; rapid sequences collapse
    /// into whichever size is current when the debounce interval ends.
    fn record_resize(&mut self, width: u16, height: u16) {
        self.last_area = Some((width, height));
        self.pending_resize = Some((width, height));
        self.last_resize_at = Some(Instant::now());
    }

    /// Applies a pending resize once the debounce interval has elapsed.
    ///
    /// The lab that is active at this point receives the call, not the
    /// one that was active when the resize arrived.
    fn apply_pending_resize(&mut self) {
        let Some((width, height)) = self.pending_resize else {
            return;
        };
        let Some(at) = self.last_resize_at else {
            return;
        };
        if at.elapsed() < Duration::from_millis(RESIZE_DEBOUNCE_MS) {
            return;
        }

        self.pending_resize = None;
        self.last_resize_at = None;
        let index = self.navigator.current_lab();
        self.registry.module_mut(index).resize(width, height);
        tracing::debug!(width, height, lab = index, "debounced resize applied");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labs::LabRegistry;
    use crate::navigator::GuidedPhase;
    use optiklab_config::ColorTheme;

    fn app() -> App {
        App::new(LabRegistry::standard(), ColorTheme::Light)
    }

    #[test]
    fn test_start_lab_moves_to_lab_screen() {
        let mut app = app();
        assert_eq!(app.screen, Screen::Welcome);
        app.update(Action::StartLab(0));
        assert_eq!(app.screen, Screen::Lab);
        assert_eq!(app.navigator.phase(), GuidedPhase::Guided { step: 0 });
    }

    #[test]
    fn test_continue_past_last_lab_shows_completion() {
        let mut app = app();
        app.update(Action::StartLab(app.navigator.lab_count() - 1));
        app.update(Action::ContinueToNextLab);
        assert_eq!(app.screen, Screen::Completion);
        assert!(app.completed);
    }

    #[test]
    fn test_restart_from_completion_resets_everything() {
        let mut app = app();
        app.update(Action::StartLab(app.navigator.lab_count() - 1));
        app.update(Action::ContinueToNextLab);
        app.update(Action::Restart);
        assert_eq!(app.screen, Screen::Lab);
        assert!(!app.completed);
        assert_eq!(app.navigator.current_lab(), 0);
        assert!(!app.navigator.is_free_explore());
    }

    #[test]
    fn test_free_explore_enters_lab_zero_without_guidance() {
        let mut app = app();
        app.update(Action::StartLab(app.navigator.lab_count() - 1));
        app.update(Action::ContinueToNextLab);
        app.update(Action::EnterFreeExplore);
        assert_eq!(app.screen, Screen::Lab);
        assert_eq!(app.navigator.current_lab(), 0);
        assert!(app.navigator.is_free());
        assert!(app.navigator.is_free_explore());
    }

    #[test]
    fn test_quiz_round_trip() {
        let mut app = app();
        app.update(Action::StartLab(app.navigator.lab_count() - 1));
        app.update(Action::ContinueToNextLab);
        app.update(Action::StartQuiz);
        assert_eq!(app.screen, Screen::Quiz);
        app.update(Action::BackToCompletion);
        assert_eq!(app.screen, Screen::Completion);
    }

    #[test]
    fn test_toggle_theme_requests_persistence() {
        let mut app = app();
        let follow_up = app.update(Action::ToggleTheme);
        assert_eq!(follow_up, Some(Action::PersistState));
        assert_eq!(app.color_theme, ColorTheme::Dark);
    }

    #[test]
    fn test_resize_is_not_applied_before_debounce() {
        let mut app = app();
        app.update(Action::StartLab(0));
        app.update(Action::Resize(120, 40));
        // Tick immediately after: interval not yet elapsed.
        app.update(Action::Tick);
        assert!(app.pending_resize.is_some());
    }

    #[test]
    fn test_resize_applied_after_debounce_interval() {
        let mut app = app();
        app.update(Action::StartLab(0));
        app.update(Action::Resize(120, 40));
        app.last_resize_at =
            Some(Instant::now() - Duration::from_millis(RESIZE_DEBOUNCE_MS + 10));
        app.update(Action::Tick);
        assert!(app.pending_resize.is_none());
    }

    #[test]
    fn test_later_resize_supersedes_earlier() {
        let mut app = app();
        app.update(Action::StartLab(0));
        app.update(Action::Resize(120, 40));
        app.update(Action::Resize(80, 24));
        assert_eq!(app.pending_resize, Some((80, 24)));
    }
}
