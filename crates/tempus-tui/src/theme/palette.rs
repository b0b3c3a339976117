//! Color palettes for the named themes.
//!
//! Each theme defines a light and a dark variant. Resolution is by theme
//! name string: an unknown name silently falls back to the neutral base
//! palette, so a stale persisted theme degrades instead of erroring.

use ratatui::style::Color;
use tempus_core::Mode;

/// Colors a single theme variant assigns to the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Terminal background fill
    pub bg: Color,
    /// Card/panel background
    pub surface: Color,
    /// Primary accent (active borders, active theme entry)
    pub accent: Color,
    /// Dial circle and hour marks
    pub dial: Color,
    pub hour_hand: Color,
    pub minute_hand: Color,
    pub second_hand: Color,
    /// Primary text
    pub text: Color,
    /// Secondary/muted text
    pub text_muted: Color,
}

// --- Neutral base (fallback for unknown theme names) ---
const BASE_LIGHT: Palette = Palette {
    bg: Color::Rgb(236, 239, 244),
    surface: Color::Rgb(245, 247, 250),
    accent: Color::Rgb(94, 129, 172),
    dial: Color::Rgb(76, 86, 106),
    hour_hand: Color::Rgb(59, 66, 82),
    minute_hand: Color::Rgb(76, 86, 106),
    second_hand: Color::Rgb(191, 97, 106),
    text: Color::Rgb(46, 52, 64),
    text_muted: Color::Rgb(110, 119, 138),
};

const BASE_DARK: Palette = Palette {
    bg: Color::Rgb(20, 23, 30),
    surface: Color::Rgb(30, 34, 43),
    accent: Color::Rgb(129, 161, 193),
    dial: Color::Rgb(160, 168, 184),
    hour_hand: Color::Rgb(216, 222, 233),
    minute_hand: Color::Rgb(180, 188, 204),
    second_hand: Color::Rgb(208, 108, 117),
    text: Color::Rgb(229, 233, 240),
    text_muted: Color::Rgb(130, 138, 155),
};

// --- Ocean ---
const OCEAN_LIGHT: Palette = Palette {
    bg: Color::Rgb(225, 240, 248),
    surface: Color::Rgb(240, 249, 254),
    accent: Color::Rgb(2, 132, 199),
    dial: Color::Rgb(7, 89, 133),
    hour_hand: Color::Rgb(12, 74, 110),
    minute_hand: Color::Rgb(3, 105, 161),
    second_hand: Color::Rgb(234, 88, 12),
    text: Color::Rgb(12, 74, 110),
    text_muted: Color::Rgb(71, 125, 156),
};

const OCEAN_DARK: Palette = Palette {
    bg: Color::Rgb(8, 20, 33),
    surface: Color::Rgb(12, 32, 51),
    accent: Color::Rgb(56, 189, 248),
    dial: Color::Rgb(125, 180, 216),
    hour_hand: Color::Rgb(186, 230, 253),
    minute_hand: Color::Rgb(125, 211, 252),
    second_hand: Color::Rgb(251, 146, 60),
    text: Color::Rgb(224, 242, 254),
    text_muted: Color::Rgb(105, 150, 180),
};

// --- Sunset ---
const SUNSET_LIGHT: Palette = Palette {
    bg: Color::Rgb(253, 236, 227),
    surface: Color::Rgb(255, 245, 238),
    accent: Color::Rgb(234, 88, 12),
    dial: Color::Rgb(154, 52, 18),
    hour_hand: Color::Rgb(124, 45, 18),
    minute_hand: Color::Rgb(194, 65, 12),
    second_hand: Color::Rgb(190, 18, 60),
    text: Color::Rgb(124, 45, 18),
    text_muted: Color::Rgb(176, 110, 85),
};

const SUNSET_DARK: Palette = Palette {
    bg: Color::Rgb(32, 16, 10),
    surface: Color::Rgb(46, 24, 15),
    accent: Color::Rgb(251, 146, 60),
    dial: Color::Rgb(221, 152, 110),
    hour_hand: Color::Rgb(254, 215, 170),
    minute_hand: Color::Rgb(253, 186, 116),
    second_hand: Color::Rgb(251, 113, 133),
    text: Color::Rgb(255, 237, 213),
    text_muted: Color::Rgb(175, 125, 95),
};

// --- Forest ---
const FOREST_LIGHT: Palette = Palette {
    bg: Color::Rgb(228, 242, 230),
    surface: Color::Rgb(240, 250, 242),
    accent: Color::Rgb(22, 163, 74),
    dial: Color::Rgb(21, 94, 53),
    hour_hand: Color::Rgb(20, 83, 45),
    minute_hand: Color::Rgb(22, 101, 52),
    second_hand: Color::Rgb(202, 138, 4),
    text: Color::Rgb(20, 83, 45),
    text_muted: Color::Rgb(90, 135, 105),
};

const FOREST_DARK: Palette = Palette {
    bg: Color::Rgb(10, 25, 16),
    surface: Color::Rgb(16, 36, 24),
    accent: Color::Rgb(74, 222, 128),
    dial: Color::Rgb(134, 190, 150),
    hour_hand: Color::Rgb(187, 247, 208),
    minute_hand: Color::Rgb(134, 239, 172),
    second_hand: Color::Rgb(250, 204, 21),
    text: Color::Rgb(220, 252, 231),
    text_muted: Color::Rgb(105, 155, 120),
};

impl Palette {
    /// Resolve a theme name and mode to its palette
    ///
    /// Unknown names fall back to the neutral base palette for the mode.
    pub fn resolve(theme: &str, mode: Mode) -> &'static Palette {
        match (theme, mode.is_dark()) {
            ("ocean", false) => &OCEAN_LIGHT,
            ("ocean", true) => &OCEAN_DARK,
            ("sunset", false) => &SUNSET_LIGHT,
            ("sunset", true) => &SUNSET_DARK,
            ("forest", false) => &FOREST_LIGHT,
            ("forest", true) => &FOREST_DARK,
            (_, false) => &BASE_LIGHT,
            (_, true) => &BASE_DARK,
        }
    }
}
