//! Runtime support: terminal lifecycle management.

pub mod terminal;
