//! Settings parser for config.toml
//!
//! The only setting today is the pane set: which parts of the clock UI
//! exist. Every pane defaults to present; an absent pane is skipped by
//! wiring and rendering, never an error.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tempus_core::prelude::*;

const CONFIG_FILENAME: &str = "config.toml";

/// Top-level settings loaded from `<config_dir>/tempus/config.toml`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub panes: PaneSet,
}

/// Which UI panes exist
///
/// Mirrors the page-structure contract: three hand indicators, two digital
/// text readouts, the theme selector, and the mode switch, each optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct PaneSet {
    #[serde(default = "default_true")]
    pub hour_hand: bool,
    #[serde(default = "default_true")]
    pub minute_hand: bool,
    #[serde(default = "default_true")]
    pub second_hand: bool,
    #[serde(default = "default_true")]
    pub digital_time: bool,
    #[serde(default = "default_true")]
    pub digital_date: bool,
    #[serde(default = "default_true")]
    pub theme_bar: bool,
    #[serde(default = "default_true")]
    pub mode_switch: bool,
}

fn default_true() -> bool {
    true
}

impl Default for PaneSet {
    fn default() -> Self {
        Self {
            hour_hand: true,
            minute_hand: true,
            second_hand: true,
            digital_time: true,
            digital_date: true,
            theme_bar: true,
            mode_switch: true,
        }
    }
}

impl PaneSet {
    /// True when any analog pane (dial or a hand) is present
    pub fn has_analog(&self) -> bool {
        self.hour_hand || self.minute_hand || self.second_hand
    }

    /// True when either digital readout is present
    pub fn has_digital(&self) -> bool {
        self.digital_time || self.digital_date
    }

    /// Emit one startup diagnostic per absent pane
    ///
    /// Called once after loading; a missing pane disables its feature and
    /// nothing else.
    pub fn log_missing(&self) {
        for (present, name) in [
            (self.hour_hand, "hour_hand"),
            (self.minute_hand, "minute_hand"),
            (self.second_hand, "second_hand"),
            (self.digital_time, "digital_time"),
            (self.digital_date, "digital_date"),
            (self.theme_bar, "theme_bar"),
            (self.mode_switch, "mode_switch"),
        ] {
            if !present {
                warn!("Pane not present, feature disabled: {}", name);
            }
        }
    }
}

/// Load settings from `<dir>/config.toml`
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(dir: &Path) -> Settings {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}
