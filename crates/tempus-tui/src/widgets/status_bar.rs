//! Bottom status bar with key hints

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{styles, Palette};

pub struct StatusBar<'a> {
    palette: &'a Palette,
    show_theme_hints: bool,
    show_mode_hints: bool,
}

impl<'a> StatusBar<'a> {
    pub fn new(palette: &'a Palette, show_theme_hints: bool, show_mode_hints: bool) -> Self {
        Self {
            palette,
            show_theme_hints,
            show_mode_hints,
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let key = styles::accent(self.palette);
        let text = styles::text_muted(self.palette);

        let mut spans: Vec<Span> = Vec::new();
        if self.show_theme_hints {
            spans.extend([
                Span::styled("1-3", key),
                Span::styled(" theme  ", text),
                Span::styled("←/→", key),
                Span::styled(" cycle  ", text),
            ]);
        }
        if self.show_mode_hints {
            spans.extend([
                Span::styled("enter/space", key),
                Span::styled(" mode  ", text),
            ]);
        }
        spans.extend([Span::styled("q", key), Span::styled(" quit", text)]);

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
