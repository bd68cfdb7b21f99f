//! Action definitions for the application event loop.
//!
//! Input handling maps terminal events to [`Action`]s; `App::update`
//! consumes them and may return a follow-up action that is fed back
//! into the loop.

use crossterm::event::KeyEvent;

/// All state mutations flow through these actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Exit the application.
    Quit,
    /// A key press to be routed by the active screen.
    Input(KeyEvent),
    /// Terminal was resized to the given dimensions.
    Resize(u16, u16),
    /// Periodic tick; drives the debounced resize.
    Tick,

    /// Begin the given lab in guided mode.
    StartLab(usize),
    /// Advance within the guided sequence of the active lab.
    NextStep,
    /// Step back within the guided sequence.
    PreviousStep,
    /// Leave the active lab forward: next lab or completion.
    ContinueToNextLab,
    /// Reset the whole tutorial to the first lab.
    Restart,

    /// Show the quiz screen.
    StartQuiz,
    /// Return from the quiz to the completion screen.
    BackToCompletion,

    /// Enter session-wide free exploration at the first lab.
    EnterFreeExplore,
    /// Switch the active lab during free exploration.
    SwitchToLab(usize),

    /// Toggle between the light and dark theme.
    ToggleTheme,
    /// Write the persisted preferences to disk.
    PersistState,
}
