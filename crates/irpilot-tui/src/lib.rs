//! irpilot-tui - Terminal UI for irpilot
//!
//! This crate provides the ratatui-based terminal interface: the event
//! loop, terminal lifecycle, and per-screen renderers over the application
//! state owned by irpilot-app.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

// Re-export main entry point
pub use runner::run;
