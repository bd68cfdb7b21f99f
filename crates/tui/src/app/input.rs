//! Keyboard routing: maps key presses to actions per screen.

use crossterm::event::{KeyCode, KeyEvent};

use super::{App, Screen};
use crate::action::Action;

impl App {
    /// Maps a key press to an action for the active screen.
    ///
    /// Returns `None` for keys the screen does not use.
    pub(super) fn map_key(&self, key: KeyEvent) -> Option<Action> {
        // Global bindings, valid on every screen.
        match key.code {
            KeyCode::Char('q') => return Some(Action::Quit),
            KeyCode::Char('t') => return Some(Action::ToggleTheme),
            _ => {}
        }

        match self.screen {
            Screen::Welcome => self.map_welcome_key(key),
            Screen::Lab => self.map_lab_key(key),
            Screen::Completion => self.map_completion_key(key),
            Screen::Quiz => self.map_quiz_key(key),
        }
    }

    fn map_welcome_key(&self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Enter | KeyCode::Char('s') => Some(Action::StartLab(0)),
            KeyCode::Esc => Some(Action::Quit),
            _ => None,
        }
    }

    fn map_lab_key(&self, key: KeyEvent) -> Option<Action> {
        if self.navigator.is_free_explore() {
            return self.map_free_explore_key(key);
        }

        if self.navigator.is_free() {
            return match key.code {
                KeyCode::Enter | KeyCode::Char('c') => Some(Action::ContinueToNextLab),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Right | KeyCode::Enter | KeyCode::Char('n') => Some(Action::NextStep),
            KeyCode::Left | KeyCode::Char('p') => Some(Action::PreviousStep),
            _ => None,
        }
    }

    /// During free exploration, lab switches apply immediately; there is
    /// no confirmation step.
    fn map_free_explore_key(&self, key: KeyEvent) -> Option<Action> {
        let count = self.navigator.lab_count();
        let current = self.navigator.current_lab();
        match key.code {
            KeyCode::Right => Some(Action::SwitchToLab((current + 1) % count)),
            KeyCode::Left => Some(Action::SwitchToLab((current + count - 1) % count)),
            KeyCode::Char(c @ '1'..='9') => {
                let index = (c as usize) - ('1' as usize);
                (index < count).then_some(Action::SwitchToLab(index))
            }
            KeyCode::Char('r') => Some(Action::Restart),
            _ => None,
        }
    }

    fn map_completion_key(&self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Char('r') => Some(Action::Restart),
            KeyCode::Char('f') => Some(Action::EnterFreeExplore),
            KeyCode::Char('s') => Some(Action::StartQuiz),
            _ => None,
        }
    }

    fn map_quiz_key(&self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('b') => Some(Action::BackToCompletion),
            KeyCode::Char('f') => Some(Action::EnterFreeExplore),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labs::LabRegistry;
    use optiklab_config::ColorTheme;

    fn app() -> App {
        App::new(LabRegistry::standard(), ColorTheme::Light)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn test_quit_is_global() {
        let mut app = app();
        for screen in [Screen::Welcome, Screen::Lab, Screen::Completion, Screen::Quiz] {
            app.screen = screen;
            assert_eq!(app.map_key(press(KeyCode::Char('q'))), Some(Action::Quit));
        }
    }

    #[test]
    fn test_welcome_enter_starts_first_lab() {
        let app = app();
        assert_eq!(
            app.map_key(press(KeyCode::Enter)),
            Some(Action::StartLab(0))
        );
    }

    #[test]
    fn test_guided_lab_arrows_step() {
        let mut app = app();
        app.update(Action::StartLab(0));
        assert_eq!(app.map_key(press(KeyCode::Right)), Some(Action::NextStep));
        assert_eq!(
            app.map_key(press(KeyCode::Left)),
            Some(Action::PreviousStep)
        );
    }

    #[test]
    fn test_free_mode_enter_continues_to_next_lab() {
        let mut app = app();
        app.update(Action::StartLab(0));
        app.navigator.enter_free_mode();
        assert_eq!(
            app.map_key(press(KeyCode::Enter)),
            Some(Action::ContinueToNextLab)
        );
    }

    #[test]
    fn test_free_explore_arrows_cycle_labs() {
        let mut app = app();
        app.update(Action::EnterFreeExplore);
        assert_eq!(
            app.map_key(press(KeyCode::Right)),
            Some(Action::SwitchToLab(1))
        );
        // Left from lab 0 wraps to the last lab.
        assert_eq!(
            app.map_key(press(KeyCode::Left)),
            Some(Action::SwitchToLab(6))
        );
    }

    #[test]
    fn test_free_explore_digits_select_labs() {
        let mut app = app();
        app.update(Action::EnterFreeExplore);
        assert_eq!(
            app.map_key(press(KeyCode::Char('3'))),
            Some(Action::SwitchToLab(2))
        );
        // Digit past the registry is ignored.
        assert_eq!(app.map_key(press(KeyCode::Char('8'))), None);
    }

    #[test]
    fn test_completion_screen_bindings() {
        let mut app = app();
        app.screen = Screen::Completion;
        assert_eq!(app.map_key(press(KeyCode::Char('r'))), Some(Action::Restart));
        assert_eq!(
            app.map_key(press(KeyCode::Char('f'))),
            Some(Action::EnterFreeExplore)
        );
        assert_eq!(
            app.map_key(press(KeyCode::Char('s'))),
            Some(Action::StartQuiz)
        );
    }

    #[test]
    fn test_quiz_screen_returns_to_completion() {
        let mut app = app();
        app.screen = Screen::Quiz;
        assert_eq!(
            app.map_key(press(KeyCode::Esc)),
            Some(Action::BackToCompletion)
        );
    }

    #[test]
    fn test_unbound_key_is_ignored() {
        let app = app();
        assert_eq!(app.map_key(press(KeyCode::Char('z'))), None);
    }
}
