//! Domain types shared across tempus crates

/// The enumerated theme set, in theme-bar display order
pub const KNOWN_THEMES: [&str; 3] = ["ocean", "sunset", "forest"];

/// Theme applied when nothing is persisted
pub const DEFAULT_THEME: &str = "ocean";

/// Binary light/dark visual mode, independent of theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Light,
    Dark,
}

impl Mode {
    /// Persisted string form: exactly "Dark Mode" or "Light Mode"
    pub fn as_persisted(&self) -> &'static str {
        match self {
            Mode::Light => "Light Mode",
            Mode::Dark => "Dark Mode",
        }
    }

    /// Parse a stored value. Anything other than the dark literal means light.
    pub fn from_persisted(value: Option<&str>) -> Self {
        match value {
            Some("Dark Mode") => Mode::Dark,
            _ => Mode::Light,
        }
    }

    /// Label for the mode switch: names the *next* action, not the current state
    pub fn switch_label(&self) -> &'static str {
        match self {
            Mode::Light => "Dark Mode",
            Mode::Dark => "Light Mode",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Mode::Light => Mode::Dark,
            Mode::Dark => Mode::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Mode::Dark)
    }
}
