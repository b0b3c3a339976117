//! Analog dial widget
//!
//! Draws the dial circle, the twelve hour marks, and the hands at their
//! computed rotations on a braille canvas. Hands whose pane is absent are
//! simply not drawn; the dial keeps rendering with whatever remains.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Circle, Line as CanvasLine},
        Widget,
    },
};

use tempus_app::PaneSet;
use tempus_core::HandAngles;

use crate::theme::Palette;

const DIAL_RADIUS: f64 = 1.0;
const MARK_INNER: f64 = 0.92;
const HOUR_HAND_LEN: f64 = 0.55;
const MINUTE_HAND_LEN: f64 = 0.8;
const SECOND_HAND_LEN: f64 = 0.9;

/// The analog clock face
pub struct AnalogDial<'a> {
    angles: HandAngles,
    palette: &'a Palette,
    panes: &'a PaneSet,
}

impl<'a> AnalogDial<'a> {
    pub fn new(angles: HandAngles, palette: &'a Palette, panes: &'a PaneSet) -> Self {
        Self {
            angles,
            palette,
            panes,
        }
    }
}

impl Widget for AnalogDial<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let palette = self.palette;
        let canvas = Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([-1.2, 1.2])
            .y_bounds([-1.2, 1.2])
            .paint(|ctx| {
                ctx.draw(&Circle {
                    x: 0.0,
                    y: 0.0,
                    radius: DIAL_RADIUS,
                    color: palette.dial,
                });

                // Hour marks every 30 degrees
                for i in 0..12 {
                    let deg = f64::from(i) * 30.0;
                    let (x1, y1) = dial_point(deg, MARK_INNER);
                    let (x2, y2) = dial_point(deg, DIAL_RADIUS);
                    ctx.draw(&CanvasLine {
                        x1,
                        y1,
                        x2,
                        y2,
                        color: palette.dial,
                    });
                }

                if self.panes.hour_hand {
                    draw_hand(ctx, self.angles.hour_deg, HOUR_HAND_LEN, palette.hour_hand);
                }
                if self.panes.minute_hand {
                    draw_hand(
                        ctx,
                        self.angles.minute_deg,
                        MINUTE_HAND_LEN,
                        palette.minute_hand,
                    );
                }
                if self.panes.second_hand {
                    draw_hand(
                        ctx,
                        self.angles.second_deg,
                        SECOND_HAND_LEN,
                        palette.second_hand,
                    );
                }
            });

        canvas.render(area, buf);
    }
}

fn draw_hand(
    ctx: &mut ratatui::widgets::canvas::Context<'_>,
    deg: f64,
    len: f64,
    color: ratatui::style::Color,
) {
    let (x, y) = dial_point(deg, len);
    ctx.draw(&CanvasLine {
        x1: 0.0,
        y1: 0.0,
        x2: x,
        y2: y,
        color,
    });
}

/// Canvas coordinates of the point at `deg` (clockwise from 12 o'clock)
/// and distance `len` from the center
fn dial_point(deg: f64, len: f64) -> (f64, f64) {
    let rad = deg.to_radians();
    (len * rad.sin(), len * rad.cos())
}
