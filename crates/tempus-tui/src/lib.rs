//! tempus-tui - Terminal UI for tempus
//!
//! This crate provides the ratatui-based terminal interface: theme
//! palettes, the clock widgets, terminal event polling, and the main
//! event loop.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod signals;
pub mod terminal;
pub mod theme;
pub mod widgets;

// Re-export main entry point
pub use runner::run;
