//! Command-line argument parsing for optiklab.
//!
//! Responsibilities:
//! - Define CLI argument structure using clap derive macros.
//! - Provide parsed CLI arguments to the main application.
//!
//! Does NOT handle:
//! - Preference persistence (see `optiklab_config`).
//! - Terminal state management (see `runtime::terminal`).
//!
//! Invariants:
//! - CLI arguments are parsed once at startup via `Cli::parse()`.
//! - All path arguments are resolved relative to the current working directory.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for optiklab.
///
/// Configuration precedence (highest to lowest):
/// 1. CLI arguments (e.g., --theme)
/// 2. Persisted preferences (from config.json)
/// 3. Default values
#[derive(Debug, Parser)]
#[command(
    name = "optiklab",
    about = "Interactive optics labs in the terminal",
    version,
    after_help = "Examples:\n  optiklab\n  optiklab --lab prism\n  optiklab --theme dark\n  optiklab --log-dir /tmp/optiklab-logs --fresh\n"
)]
pub struct Cli {
    /// Jump straight into the given lab (id, e.g. "plane-mirror")
    #[arg(long, short = 'l')]
    pub lab: Option<String>,

    /// Override the persisted theme for this run
    #[arg(long, value_parser = ["light", "dark"])]
    pub theme: Option<String>,

    /// Directory for log files
    #[arg(long, default_value = "logs")]
    pub log_dir: PathBuf,

    /// Start with fresh preferences, ignoring any persisted state
    #[arg(long)]
    pub fresh: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["optiklab"]);
        assert!(cli.lab.is_none());
        assert!(cli.theme.is_none());
        assert!(!cli.fresh);
        assert_eq!(cli.log_dir, PathBuf::from("logs"));
    }

    #[test]
    fn test_lab_flag() {
        let cli = Cli::parse_from(["optiklab", "--lab", "prism"]);
        assert_eq!(cli.lab.as_deref(), Some("prism"));
    }

    #[test]
    fn test_theme_accepts_known_values() {
        let cli = Cli::parse_from(["optiklab", "--theme", "dark"]);
        assert_eq!(cli.theme.as_deref(), Some("dark"));
    }

    #[test]
    fn test_theme_rejects_unknown_values() {
        assert!(Cli::try_parse_from(["optiklab", "--theme", "sepia"]).is_err());
    }

    #[test]
    fn test_fresh_flag() {
        let cli = Cli::parse_from(["optiklab", "--fresh"]);
        assert!(cli.fresh);
    }
}
