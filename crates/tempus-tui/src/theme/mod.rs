//! Theme system for the clock UI.
//!
//! This module provides:
//! - `palette` — Per-theme color palettes with light and dark variants
//! - `styles` — Semantic style builder functions over a palette

pub mod palette;
pub mod styles;

pub use palette::Palette;
