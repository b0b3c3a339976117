//! Clock UI widgets

mod analog;
mod digital;
mod mode_switch;
mod status_bar;
mod theme_bar;

pub use analog::AnalogDial;
pub use digital::DigitalReadout;
pub use mode_switch::{ModeSwitch, SWITCH_HEIGHT, SWITCH_WIDTH};
pub use status_bar::StatusBar;
pub use theme_bar::ThemeBar;
