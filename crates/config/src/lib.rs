//! Configuration management for Optiklab.
//!
//! This crate provides the persisted user preferences (currently a single
//! theme flag), the runtime theme palette expanded from that flag, and the
//! shared constants used across the workspace.

pub mod constants;
pub mod persistence;
pub mod types;

pub use persistence::{ConfigManager, PersistedState};
pub use types::{ColorTheme, Theme};
