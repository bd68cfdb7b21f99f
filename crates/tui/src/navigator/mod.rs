//! Guided-tutorial navigation.
//!
//! The [`Navigator`] is the single stateful entity of the tutorial flow: it
//! tracks which lab is active, which guided step is shown, and whether the
//! lab (or the whole session) is in free-exploration mode. Everything the
//! screens show is a pure projection of this state plus the static lab
//! registry.

mod display;
mod state;

pub use display::{FreeModeCta, PickerRow, StepDisplay, DEFAULT_STEP_TITLE};
pub use state::{GuidedPhase, LabTransition, Navigator, StepTransition};
