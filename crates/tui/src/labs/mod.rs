//! Lab content: the interactive optics modules and their guided steps.
//!
//! Each lab implements [`LabModule`]; the [`LabRegistry`] owns one boxed
//! instance per lab and defines the canonical ordering of the tutorial.
//! Navigation state never lives here. The navigator addresses labs by
//! registry index and the app forwards lifecycle calls (init, resize,
//! theme changes) to the module behind that index.

mod concave_lens;
mod concave_mirror;
mod convex_lens;
mod convex_mirror;
mod plane_mirror;
mod prism;
mod refraction;

pub use concave_lens::ConcaveLensLab;
pub use concave_mirror::ConcaveMirrorLab;
pub use convex_lens::ConvexLensLab;
pub use convex_mirror::ConvexMirrorLab;
pub use plane_mirror::PlaneMirrorLab;
pub use prism::PrismLab;
pub use refraction::RefractionLab;

use optiklab_config::Theme;
use ratatui::layout::Rect;
use ratatui::Frame;

/// One guided tutorial step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// Tutorial text shown in the guided panel.
    pub text: &'static str,
    /// Optional concept label used as the panel title.
    pub concept: Option<&'static str>,
}

/// Static description of a lab, detached from its live module.
///
/// The navigator works on descriptors only; the registry keeps the
/// matching [`LabModule`] instances at the same indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabDescriptor {
    /// Stable identifier, e.g. `"plane-mirror"`.
    pub id: &'static str,
    /// Human-readable name shown in headers and the lab picker.
    pub display_name: &'static str,
    /// Guided steps in presentation order. May be empty.
    pub steps: Vec<Step>,
}

/// Behavior every lab provides to the shell.
///
/// Lifecycle calls are best-effort hooks: the shell calls them at the
/// documented times and ignores whatever the lab chooses not to track.
pub trait LabModule {
    /// Stable identifier matching the descriptor.
    fn id(&self) -> &'static str;

    /// Display name matching the descriptor.
    fn display_name(&self) -> &'static str;

    /// One-time setup, called once at startup for every lab.
    fn init(&mut self) {}

    /// Notifies the lab of the drawing area it will be rendered into.
    ///
    /// Called on activation and after the debounced terminal resize.
    fn resize(&mut self, _width: u16, _height: u16) {}

    /// Propagates the process-wide dark-mode preference.
    fn set_dark_mode(&mut self, _dark: bool) {}

    /// Guided steps for this lab. Empty means the lab is free-form only.
    fn guided_steps(&self) -> &'static [Step] {
        &[]
    }

    /// Draws the lab's interactive area.
    fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme);
}

/// Ordered collection of all labs.
pub struct LabRegistry {
    modules: Vec<Box<dyn LabModule>>,
}

impl LabRegistry {
    /// The standard seven-lab curriculum, in tutorial order.
    pub fn standard() -> Self {
        Self::new(vec![
            Box::new(PlaneMirrorLab::new()),
            Box::new(ConcaveMirrorLab::new()),
            Box::new(ConvexMirrorLab::new()),
            Box::new(ConvexLensLab::new()),
            Box::new(ConcaveLensLab::new()),
            Box::new(RefractionLab::new()),
            Box::new(PrismLab::new()),
        ])
    }

    /// Builds a registry from explicit modules.
    ///
    /// # Panics
    /// Panics if two modules share an id; ids key CLI selection and
    /// duplicates are a wiring bug.
    pub fn new(modules: Vec<Box<dyn LabModule>>) -> Self {
        for (i, a) in modules.iter().enumerate() {
            for b in &modules[i + 1..] {
                assert!(a.id() != b.id(), "duplicate lab id {:?}", a.id());
            }
        }
        Self { modules }
    }

    /// Descriptors for every lab, in registry order.
    pub fn descriptors(&self) -> Vec<LabDescriptor> {
        self.modules
            .iter()
            .map(|m| LabDescriptor {
                id: m.id(),
                display_name: m.display_name(),
                steps: m.guided_steps().to_vec(),
            })
            .collect()
    }

    /// Position of the lab with `id`, if registered.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.modules.iter().position(|m| m.id() == id)
    }

    pub fn module(&self, index: usize) -> &dyn LabModule {
        self.modules[index].as_ref()
    }

    pub fn module_mut(&mut self, index: usize) -> &mut dyn LabModule {
        self.modules[index].as_mut()
    }

    /// Runs one-time setup on every lab.
    pub fn init_all(&mut self) {
        for module in &mut self.modules {
            module.init();
        }
    }

    /// Pushes the dark-mode preference to every lab.
    pub fn broadcast_dark_mode(&mut self, dark: bool) {
        for module in &mut self.modules {
            module.set_dark_mode(dark);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_registry_order() {
        let registry = LabRegistry::standard();
        let ids: Vec<&str> = registry.descriptors().iter().map(|d| d.id).collect();
        assert_eq!(
            ids,
            [
                "plane-mirror",
                "concave-mirror",
                "convex-mirror",
                "convex-lens",
                "concave-lens",
                "refraction",
                "prism",
            ]
        );
    }

    #[test]
    fn test_standard_labs_have_guided_steps() {
        let registry = LabRegistry::standard();
        for descriptor in registry.descriptors() {
            assert!(
                !descriptor.steps.is_empty(),
                "lab {} has no guided steps",
                descriptor.id
            );
        }
    }

    #[test]
    fn test_index_of_finds_registered_ids() {
        let registry = LabRegistry::standard();
        assert_eq!(registry.index_of("plane-mirror"), Some(0));
        assert_eq!(registry.index_of("prism"), Some(6));
        assert_eq!(registry.index_of("laser"), None);
    }

    #[test]
    fn test_descriptors_match_modules() {
        let registry = LabRegistry::standard();
        for (index, descriptor) in registry.descriptors().iter().enumerate() {
            assert_eq!(descriptor.id, registry.module(index).id());
            assert_eq!(descriptor.display_name, registry.module(index).display_name());
        }
    }

    struct DupLab;

    impl LabModule for DupLab {
        fn id(&self) -> &'static str {
            "dup"
        }

        fn display_name(&self) -> &'static str {
            "Dup"
        }

        fn render(&self, _frame: &mut Frame, _area: Rect, _theme: &Theme) {}
    }

    #[test]
    #[should_panic(expected = "duplicate lab id")]
    fn test_duplicate_ids_rejected() {
        LabRegistry::new(vec![Box::new(DupLab), Box::new(DupLab)]);
    }
}
