//! Screen definitions for the application.

/// The top-level screens of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Introductory screen shown at startup.
    #[default]
    Welcome,
    /// The active lab with its guided panel or free-mode chrome.
    Lab,
    /// Shown after the last lab is finished.
    Completion,
    /// Knowledge check reachable from the completion screen.
    Quiz,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_screen_is_welcome() {
        assert_eq!(Screen::default(), Screen::Welcome);
    }
}
