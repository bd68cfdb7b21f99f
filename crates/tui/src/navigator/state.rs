//! Tutorial state machine and progression logic.
//!
//! Responsibilities:
//! - Track the active lab, the guided phase within it, and free-explore mode
//! - Define the exhaustive transition table for step/lab advancement
//! - Compute progress values derived from the lab position
//!
//! Does NOT handle:
//! - UI rendering (handled by the UI layer)
//! - Lab content or drawing (handled by the `labs` module)
//!
//! Invariants:
//! - `current_lab` is always a valid index into the registry.
//! - In `Guided { step }`, `step` is a valid step index for the current lab,
//!   except for a lab with zero steps where `Guided { 0 }` means the guided
//!   sequence is already exhausted.
//! - `Free` is never left except through `start_lab` or `restart`.

use crate::labs::LabDescriptor;

/// Per-lab phase: walking the guided steps, or exploring freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuidedPhase {
    /// Showing guided step `step` of the active lab.
    Guided { step: usize },
    /// Guided content hidden; the user interacts unconstrained.
    Free,
}

/// Outcome of an [`Navigator::advance`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepTransition {
    /// Moved to the next guided step.
    Advanced,
    /// The guided sequence was exhausted; the lab entered free mode.
    EnteredFreeMode,
    /// Already in free mode; nothing changed.
    AlreadyFree,
}

/// Outcome of an [`Navigator::advance_lab`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabTransition {
    /// The next lab was started in guided mode.
    Started(usize),
    /// The active lab was the last one; the session is complete. This is a
    /// presentation transition: the navigator itself keeps its final state.
    AllComplete,
}

/// Owns the tutorial navigation state for one session.
///
/// Constructed once at startup from the immutable lab registry; all
/// mutation goes through the operations below.
#[derive(Debug, Clone)]
pub struct Navigator {
    labs: Vec<LabDescriptor>,
    current_lab: usize,
    phase: GuidedPhase,
    free_explore: bool,
}

impl Navigator {
    /// Creates a navigator positioned at step 0 of the first lab.
    ///
    /// # Panics
    /// Panics if `labs` is empty; the registry is trusted, process-wide
    /// configuration and an empty one is a construction bug.
    pub fn new(labs: Vec<LabDescriptor>) -> Self {
        assert!(!labs.is_empty(), "lab registry must not be empty");
        Self {
            labs,
            current_lab: 0,
            phase: GuidedPhase::Guided { step: 0 },
            free_explore: false,
        }
    }

    /// Number of registered labs.
    pub fn lab_count(&self) -> usize {
        self.labs.len()
    }

    /// Index of the active lab.
    pub fn current_lab(&self) -> usize {
        self.current_lab
    }

    /// Descriptor of the active lab.
    pub fn current_descriptor(&self) -> &LabDescriptor {
        &self.labs[self.current_lab]
    }

    /// All registered descriptors, in registry order.
    pub fn descriptors(&self) -> &[LabDescriptor] {
        &self.labs
    }

    /// The guided phase of the active lab.
    pub fn phase(&self) -> GuidedPhase {
        self.phase
    }

    /// Whether the active lab is in free mode.
    pub fn is_free(&self) -> bool {
        matches!(self.phase, GuidedPhase::Free)
    }

    /// Whether the session is in global free-explore mode.
    pub fn is_free_explore(&self) -> bool {
        self.free_explore
    }

    /// Number of guided steps in the active lab.
    pub fn step_count(&self) -> usize {
        self.current_descriptor().steps.len()
    }

    /// Activates `index` in guided mode at step 0.
    ///
    /// # Panics
    /// Panics if `index` is out of range. Indices come from internal
    /// callers or registry length checks; an out-of-range value is a
    /// contract violation, not a recoverable error.
    pub fn start_lab(&mut self, index: usize) {
        assert!(index < self.labs.len(), "lab index {index} out of range");
        self.current_lab = index;
        self.phase = GuidedPhase::Guided { step: 0 };
    }

    /// Advances within the guided sequence, or into free mode at the end.
    ///
    /// The transition table is exhaustive: a lab with zero steps counts as
    /// already past its last step, so the first advance enters free mode.
    pub fn advance(&mut self) -> StepTransition {
        match self.phase {
            GuidedPhase::Guided { step } if step + 1 < self.step_count() => {
                self.phase = GuidedPhase::Guided { step: step + 1 };
                StepTransition::Advanced
            }
            GuidedPhase::Guided { .. } => {
                self.phase = GuidedPhase::Free;
                StepTransition::EnteredFreeMode
            }
            GuidedPhase::Free => StepTransition::AlreadyFree,
        }
    }

    /// Steps back within the guided sequence.
    ///
    /// Returns `false` (state unchanged) at step 0 and in free mode.
    pub fn retreat(&mut self) -> bool {
        match self.phase {
            GuidedPhase::Guided { step } if step > 0 => {
                self.phase = GuidedPhase::Guided { step: step - 1 };
                true
            }
            _ => false,
        }
    }

    /// Puts the active lab in free mode without changing the lab index.
    pub fn enter_free_mode(&mut self) {
        self.phase = GuidedPhase::Free;
    }

    /// Moves forward out of the active lab.
    ///
    /// Starts the next lab in guided mode, or reports completion when the
    /// active lab is the last one.
    pub fn advance_lab(&mut self) -> LabTransition {
        if self.current_lab + 1 < self.labs.len() {
            let next = self.current_lab + 1;
            self.start_lab(next);
            LabTransition::Started(next)
        } else {
            LabTransition::AllComplete
        }
    }

    /// Enters global free-explore mode at lab 0.
    ///
    /// Every lab reached from here on (via [`Self::switch_to_lab`]) bypasses
    /// guided mode; only [`Self::restart`] leaves free-explore.
    pub fn enter_free_explore(&mut self) {
        self.free_explore = true;
        self.current_lab = 0;
        self.phase = GuidedPhase::Free;
    }

    /// Activates `index` in free mode, preserving free-explore.
    ///
    /// Unlike [`Self::start_lab`] this never re-enters guided mode: lab
    /// switches during free exploration never re-show tutorial steps.
    ///
    /// # Panics
    /// Panics if `index` is out of range (see [`Self::start_lab`]).
    pub fn switch_to_lab(&mut self, index: usize) {
        assert!(index < self.labs.len(), "lab index {index} out of range");
        self.current_lab = index;
        self.phase = GuidedPhase::Free;
    }

    /// Resets to the initial state: lab 0, step 0, guided, not free-explore.
    pub fn restart(&mut self) {
        self.free_explore = false;
        self.start_lab(0);
    }

    /// Progress through the lab sequence as a percentage in `[0, 100]`.
    ///
    /// Counts fully *passed* labs: `current_lab / lab_count`. The active
    /// lab does not contribute until it is left, so the value never reaches
    /// 100 while a lab is active; the completion screen forces 100 itself.
    pub fn progress_percent(&self) -> f64 {
        (self.current_lab as f64 / self.labs.len() as f64) * 100.0
    }

    /// Progress text, e.g. `"Lab 3/7"`.
    pub fn progress_label(&self) -> String {
        format!("Lab {}/{}", self.current_lab + 1, self.labs.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labs::Step;

    fn descriptor(id: &'static str, steps: usize) -> LabDescriptor {
        const STEP: Step = Step {
            text: "look at the diagram",
            concept: None,
        };
        LabDescriptor {
            id,
            display_name: id,
            steps: vec![STEP; steps],
        }
    }

    fn navigator(step_counts: &[usize]) -> Navigator {
        let labs = step_counts
            .iter()
            .enumerate()
            .map(|(i, &n)| {
                let mut d = descriptor("lab", n);
                d.id = Box::leak(format!("lab-{i}").into_boxed_str());
                d
            })
            .collect();
        Navigator::new(labs)
    }

    #[test]
    fn test_new_starts_at_first_lab_step_zero() {
        let nav = navigator(&[3, 2]);
        assert_eq!(nav.current_lab(), 0);
        assert_eq!(nav.phase(), GuidedPhase::Guided { step: 0 });
        assert!(!nav.is_free());
        assert!(!nav.is_free_explore());
    }

    #[test]
    #[should_panic(expected = "must not be empty")]
    fn test_new_rejects_empty_registry() {
        Navigator::new(Vec::new());
    }

    #[test]
    fn test_start_lab_resets_step_and_free_mode() {
        let mut nav = navigator(&[3, 2]);
        nav.advance();
        nav.enter_free_mode();
        for index in 0..nav.lab_count() {
            nav.start_lab(index);
            assert_eq!(nav.current_lab(), index);
            assert_eq!(nav.phase(), GuidedPhase::Guided { step: 0 });
            assert!(!nav.is_free());
        }
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_start_lab_out_of_range_panics() {
        navigator(&[1]).start_lab(1);
    }

    #[test]
    fn test_advance_walks_steps_then_enters_free_mode_once() {
        let mut nav = navigator(&[3]);

        assert_eq!(nav.advance(), StepTransition::Advanced);
        assert_eq!(nav.phase(), GuidedPhase::Guided { step: 1 });
        assert_eq!(nav.advance(), StepTransition::Advanced);
        assert_eq!(nav.phase(), GuidedPhase::Guided { step: 2 });

        // Third call is the boundary: step index never exceeds 2.
        assert_eq!(nav.advance(), StepTransition::EnteredFreeMode);
        assert!(nav.is_free());

        assert_eq!(nav.advance(), StepTransition::AlreadyFree);
        assert!(nav.is_free());
    }

    #[test]
    fn test_advance_on_zero_step_lab_enters_free_mode_immediately() {
        let mut nav = navigator(&[0]);
        assert_eq!(nav.phase(), GuidedPhase::Guided { step: 0 });
        assert_eq!(nav.advance(), StepTransition::EnteredFreeMode);
        assert!(nav.is_free());
    }

    #[test]
    fn test_retreat_is_noop_at_lower_boundary() {
        let mut nav = navigator(&[3]);
        assert!(!nav.retreat());
        assert_eq!(nav.phase(), GuidedPhase::Guided { step: 0 });

        nav.advance();
        assert!(nav.retreat());
        assert_eq!(nav.phase(), GuidedPhase::Guided { step: 0 });
    }

    #[test]
    fn test_retreat_is_noop_in_free_mode() {
        let mut nav = navigator(&[2]);
        nav.enter_free_mode();
        assert!(!nav.retreat());
        assert!(nav.is_free());
    }

    #[test]
    fn test_advance_lab_starts_next_in_guided_mode() {
        let mut nav = navigator(&[2, 1]);
        nav.enter_free_mode();
        assert_eq!(nav.advance_lab(), LabTransition::Started(1));
        assert_eq!(nav.current_lab(), 1);
        assert_eq!(nav.phase(), GuidedPhase::Guided { step: 0 });
    }

    #[test]
    fn test_advance_lab_on_last_lab_reports_completion() {
        let mut nav = navigator(&[2, 1]);
        nav.start_lab(1);
        assert_eq!(nav.advance_lab(), LabTransition::AllComplete);
        // Navigator state is untouched; completion is a display concern.
        assert_eq!(nav.current_lab(), 1);
    }

    #[test]
    fn test_enter_free_explore_resets_to_lab_zero_free() {
        let mut nav = navigator(&[2, 1, 1]);
        nav.start_lab(2);
        nav.enter_free_explore();
        assert_eq!(nav.current_lab(), 0);
        assert!(nav.is_free());
        assert!(nav.is_free_explore());
    }

    #[test]
    fn test_switch_to_lab_never_shows_guided_content() {
        let mut nav = navigator(&[2, 5, 1]);
        nav.enter_free_explore();
        // Lab 1 has unseen guided steps; switching must not reveal them.
        nav.switch_to_lab(1);
        assert_eq!(nav.current_lab(), 1);
        assert!(nav.is_free());
        assert!(nav.is_free_explore());
    }

    #[test]
    fn test_restart_clears_free_explore() {
        let mut nav = navigator(&[2, 1]);
        nav.enter_free_explore();
        nav.switch_to_lab(1);
        nav.restart();
        assert_eq!(nav.current_lab(), 0);
        assert_eq!(nav.phase(), GuidedPhase::Guided { step: 0 });
        assert!(!nav.is_free_explore());
    }

    #[test]
    fn test_progress_percent_counts_passed_labs_only() {
        let mut nav = navigator(&[1; 7]);
        assert_eq!(nav.progress_percent(), 0.0);

        nav.start_lab(6);
        let pct = nav.progress_percent();
        assert!((pct - 85.714).abs() < 0.01, "got {pct}");
        // 100 is only reachable via the completion transition.
        assert!(pct < 100.0);
    }

    #[test]
    fn test_progress_label_is_one_indexed() {
        let mut nav = navigator(&[1; 7]);
        assert_eq!(nav.progress_label(), "Lab 1/7");
        nav.start_lab(6);
        assert_eq!(nav.progress_label(), "Lab 7/7");
    }

    #[test]
    fn test_two_lab_walkthrough_with_zero_step_lab() {
        // Registry: A with 2 steps, B with 0 steps.
        let mut nav = navigator(&[2, 0]);

        nav.start_lab(0);
        assert_eq!(nav.phase(), GuidedPhase::Guided { step: 0 });

        assert_eq!(nav.advance(), StepTransition::Advanced);
        assert_eq!(nav.phase(), GuidedPhase::Guided { step: 1 });

        assert_eq!(nav.advance(), StepTransition::EnteredFreeMode);
        assert!(nav.is_free());

        assert_eq!(nav.advance_lab(), LabTransition::Started(1));
        assert_eq!(nav.current_lab(), 1);

        // B has no steps: advancing must immediately yield free mode.
        assert_eq!(nav.advance(), StepTransition::EnteredFreeMode);
        assert!(nav.is_free());
    }
}
