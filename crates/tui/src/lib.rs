//! Optiklab
//!
//! This library provides the application state, tutorial navigation and
//! UI components for the optics-lab terminal user interface.
//!
//! # Example
//!
//! ```rust
//! use optiklab_tui::{Action, App};
//! use optiklab_tui::labs::LabRegistry;
//! use optiklab_config::ColorTheme;
//!
//! let mut app = App::new(LabRegistry::standard(), ColorTheme::Light);
//! app.update(Action::StartLab(0));
//! ```

pub mod action;
pub mod app;
pub mod cli;
pub mod labs;
pub mod navigator;
pub mod runtime;
pub mod ui;

// Re-export commonly used types at the crate root
pub use action::Action;
pub use app::{App, Screen};
pub use navigator::Navigator;
