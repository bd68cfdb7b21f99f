//! Derived display state for the tutorial flow.
//!
//! Responsibilities:
//! - Project navigator state into the values the screens render: the guided
//!   step panel, the free-mode call to action, and the free-explore picker
//!
//! Does NOT handle:
//! - State mutation (see `state`)
//! - Widget construction (see `ui::screens`)

use super::state::{GuidedPhase, Navigator};

/// Fallback title for a step without an explicit concept label.
pub const DEFAULT_STEP_TITLE: &str = "Guide";

/// Everything the guided-step panel shows for the current step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepDisplay {
    /// Concept label of the step, or the generic fallback.
    pub title: String,
    /// Tutorial text of the step.
    pub text: String,
    /// Position indicator, e.g. `"Step 2/4"`.
    pub indicator: String,
    /// Whether the "previous" control is enabled.
    pub prev_enabled: bool,
    /// Whether the "next" control is terminal (last step: finish the guide).
    pub next_is_finish: bool,
}

/// Call to action shown in the free-mode indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FreeModeCta {
    /// The active lab is the last one: finishing leads to completion.
    FinishAll,
    /// Continue forward into the named lab.
    ContinueTo { next_name: String },
}

/// One row of the free-explore lab picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerRow {
    pub index: usize,
    pub name: String,
    pub active: bool,
}

impl Navigator {
    /// The guided panel contents, or `None` when nothing guided is shown
    /// (free mode, or a lab without steps).
    pub fn step_display(&self) -> Option<StepDisplay> {
        let step_index = match self.phase() {
            GuidedPhase::Guided { step } => step,
            GuidedPhase::Free => return None,
        };
        let steps = &self.current_descriptor().steps;
        let step = steps.get(step_index)?;

        Some(StepDisplay {
            title: step.concept.unwrap_or(DEFAULT_STEP_TITLE).to_string(),
            text: step.text.to_string(),
            indicator: format!("Step {}/{}", step_index + 1, steps.len()),
            prev_enabled: step_index > 0,
            next_is_finish: step_index == steps.len() - 1,
        })
    }

    /// The free-mode call to action for the active lab.
    pub fn free_mode_cta(&self) -> FreeModeCta {
        match self.descriptors().get(self.current_lab() + 1) {
            Some(next) => FreeModeCta::ContinueTo {
                next_name: next.display_name.to_string(),
            },
            None => FreeModeCta::FinishAll,
        }
    }

    /// Picker rows for free-explore, one per lab in registry order.
    pub fn picker_rows(&self) -> Vec<PickerRow> {
        self.descriptors()
            .iter()
            .enumerate()
            .map(|(index, lab)| PickerRow {
                index,
                name: lab.display_name.to_string(),
                active: index == self.current_lab(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labs::{LabDescriptor, Step};

    fn registry() -> Vec<LabDescriptor> {
        vec![
            LabDescriptor {
                id: "mirror",
                display_name: "Plane mirror",
                steps: vec![
                    Step {
                        text: "move the object",
                        concept: Some("Reflection"),
                    },
                    Step {
                        text: "watch the image",
                        concept: None,
                    },
                ],
            },
            LabDescriptor {
                id: "prism",
                display_name: "Prism",
                steps: vec![Step {
                    text: "rotate the prism",
                    concept: Some("Dispersion"),
                }],
            },
        ]
    }

    #[test]
    fn test_step_display_first_step() {
        let nav = Navigator::new(registry());
        let display = nav.step_display().unwrap();
        assert_eq!(display.title, "Reflection");
        assert_eq!(display.text, "move the object");
        assert_eq!(display.indicator, "Step 1/2");
        assert!(!display.prev_enabled);
        assert!(!display.next_is_finish);
    }

    #[test]
    fn test_step_display_last_step_uses_fallback_title_and_finish_label() {
        let mut nav = Navigator::new(registry());
        nav.advance();
        let display = nav.step_display().unwrap();
        assert_eq!(display.title, DEFAULT_STEP_TITLE);
        assert_eq!(display.indicator, "Step 2/2");
        assert!(display.prev_enabled);
        assert!(display.next_is_finish);
    }

    #[test]
    fn test_step_display_none_in_free_mode() {
        let mut nav = Navigator::new(registry());
        nav.enter_free_mode();
        assert!(nav.step_display().is_none());
    }

    #[test]
    fn test_step_display_none_for_zero_step_lab() {
        let mut labs = registry();
        labs[0].steps.clear();
        let nav = Navigator::new(labs);
        assert!(nav.step_display().is_none());
    }

    #[test]
    fn test_free_mode_cta_points_at_next_lab() {
        let nav = Navigator::new(registry());
        assert_eq!(
            nav.free_mode_cta(),
            FreeModeCta::ContinueTo {
                next_name: "Prism".to_string(),
            }
        );
    }

    #[test]
    fn test_free_mode_cta_on_last_lab_is_finish_all() {
        let mut nav = Navigator::new(registry());
        nav.start_lab(1);
        assert_eq!(nav.free_mode_cta(), FreeModeCta::FinishAll);
    }

    #[test]
    fn test_picker_rows_list_all_labs_in_order_marking_active() {
        let mut nav = Navigator::new(registry());
        nav.enter_free_explore();
        nav.switch_to_lab(1);

        let rows = nav.picker_rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "Plane mirror");
        assert!(!rows[0].active);
        assert_eq!(rows[1].name, "Prism");
        assert!(rows[1].active);
    }
}
