//! Centralized constants for the Optiklab workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication and improve maintainability.

/// Default channel capacity for action messages.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// Default UI tick interval for animations in milliseconds.
pub const DEFAULT_UI_TICK_MS: u64 = 50;

/// Quiet interval for coalescing viewport resize events in milliseconds.
///
/// Rapid-fire resizes are collapsed into a single trailing re-fit of the
/// lab that is active when the interval elapses.
pub const RESIZE_DEBOUNCE_MS: u64 = 100;
