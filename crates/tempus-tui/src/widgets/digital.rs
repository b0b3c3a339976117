//! Digital time and date readout

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Paragraph, Widget},
};

use crate::theme::{styles, Palette};

/// Centered digital readout: formatted time above, date below
///
/// Either line may be absent (its pane is disabled); the other keeps
/// rendering in place.
pub struct DigitalReadout<'a> {
    time: Option<&'a str>,
    date: Option<&'a str>,
    palette: &'a Palette,
}

impl<'a> DigitalReadout<'a> {
    pub fn new(time: Option<&'a str>, date: Option<&'a str>, palette: &'a Palette) -> Self {
        Self {
            time,
            date,
            palette,
        }
    }
}

impl Widget for DigitalReadout<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = Vec::with_capacity(2);
        if let Some(time) = self.time {
            lines.push(Line::styled(time.to_string(), styles::digits(self.palette)));
        }
        if let Some(date) = self.date {
            lines.push(Line::styled(
                date.to_string(),
                styles::text_muted(self.palette),
            ));
        }
        if lines.is_empty() {
            return;
        }

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempus_core::Mode;

    #[test]
    fn test_renders_both_lines() {
        let palette = Palette::resolve("ocean", Mode::Light);
        let area = Rect::new(0, 0, 30, 2);
        let mut buf = Buffer::empty(area);

        DigitalReadout::new(Some("09:05:03"), Some("Sat, Jun 01 2024"), palette)
            .render(area, &mut buf);

        let rendered: String = (0..area.width)
            .map(|x| buf[(x, 0)].symbol().to_string())
            .collect();
        assert!(rendered.contains("09:05:03"));
    }

    #[test]
    fn test_renders_date_alone_when_time_pane_absent() {
        let palette = Palette::resolve("ocean", Mode::Light);
        let area = Rect::new(0, 0, 30, 2);
        let mut buf = Buffer::empty(area);

        DigitalReadout::new(None, Some("Sat, Jun 01 2024"), palette).render(area, &mut buf);

        let top_row: String = (0..area.width)
            .map(|x| buf[(x, 0)].symbol().to_string())
            .collect();
        assert!(top_row.contains("Jun"));
    }

    #[test]
    fn test_empty_readout_renders_nothing() {
        let palette = Palette::resolve("ocean", Mode::Dark);
        let area = Rect::new(0, 0, 10, 2);
        let mut buf = Buffer::empty(area);

        DigitalReadout::new(None, None, palette).render(area, &mut buf);

        let top_row: String = (0..area.width)
            .map(|x| buf[(x, 0)].symbol().to_string())
            .collect();
        assert_eq!(top_row.trim(), "");
    }
}
