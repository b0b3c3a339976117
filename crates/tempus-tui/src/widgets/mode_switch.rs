//! Mode switch control
//!
//! A small bordered button whose label names the *next* action: it reads
//! "Dark Mode" while the UI is light and "Light Mode" while dark.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    widgets::{Paragraph, Widget},
};

use crate::theme::{styles, Palette};

/// Width the switch needs including borders and padding
pub const SWITCH_WIDTH: u16 = 14;
/// Height including borders
pub const SWITCH_HEIGHT: u16 = 3;

pub struct ModeSwitch<'a> {
    label: &'a str,
    palette: &'a Palette,
}

impl<'a> ModeSwitch<'a> {
    pub fn new(label: &'a str, palette: &'a Palette) -> Self {
        Self { label, palette }
    }
}

impl Widget for ModeSwitch<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let block = styles::switch_block(self.palette);
        let inner = block.inner(area);
        block.render(area, buf);

        Paragraph::new(self.label)
            .style(styles::accent_bold(self.palette))
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}
