//! Theme selector bar
//!
//! One entry per known theme. Exactly the entry matching the applied theme
//! bears the active marker; an unknown applied theme marks nothing.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Span,
    widgets::{Paragraph, Widget},
};

use tempus_core::KNOWN_THEMES;

use crate::theme::{styles, Palette};

const ENTRY_PADDING: u16 = 2; // one space each side of the label
const ENTRY_GAP: u16 = 1;

/// Horizontal row of theme-selection entries
pub struct ThemeBar<'a> {
    active: Option<usize>,
    palette: &'a Palette,
}

impl<'a> ThemeBar<'a> {
    pub fn new(active: Option<usize>, palette: &'a Palette) -> Self {
        Self { active, palette }
    }

    /// Screen rect of each entry within `area`, in theme order
    ///
    /// Shared with mouse hit-testing so clicks land exactly on what was
    /// drawn. Entries that would overflow the area are clipped away.
    pub fn entry_areas(area: Rect) -> Vec<Rect> {
        let mut rects = Vec::with_capacity(KNOWN_THEMES.len());
        let mut x = area.x;
        for name in KNOWN_THEMES {
            let width = name.len() as u16 + ENTRY_PADDING;
            if x + width > area.right() {
                break;
            }
            rects.push(Rect::new(x, area.y, width, area.height.min(1)));
            x += width + ENTRY_GAP;
        }
        rects
    }
}

impl Widget for ThemeBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (index, rect) in Self::entry_areas(area).into_iter().enumerate() {
            let style = if self.active == Some(index) {
                styles::entry_active(self.palette)
            } else {
                styles::entry_inactive(self.palette)
            };
            let label = format!(" {} ", KNOWN_THEMES[index]);
            Paragraph::new(Span::styled(label, style)).render(rect, buf);
        }
    }
}
