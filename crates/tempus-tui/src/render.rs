//! Main render/view function (View in TEA pattern)

use chrono::Local;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use tempus_app::ClockState;
use tempus_core::clock::{self, ClockReading};

use crate::event::HitMap;
use crate::layout;
use crate::theme::Palette;
use crate::widgets::{AnalogDial, DigitalReadout, ModeSwitch, StatusBar, ThemeBar};

/// Render the complete UI and record clickable regions
///
/// Samples the clock once per call; panes absent from the pane set were
/// given no area by the layout and are skipped here.
pub fn view(frame: &mut Frame, state: &ClockState, hits: &mut HitMap) {
    let now = Local::now();
    let reading = ClockReading::from_datetime(&now);
    let palette = Palette::resolve(state.theme(), state.mode());
    let panes = state.panes();

    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(palette.bg)), area);

    let areas = layout::compute(area, panes);
    hits.clear();

    if let Some(switch_area) = areas.mode_switch {
        frame.render_widget(
            ModeSwitch::new(state.mode_switch_label(), palette),
            switch_area,
        );
        hits.mode_switch = Some(switch_area);
    }

    if let Some(dial_area) = areas.dial {
        frame.render_widget(AnalogDial::new(reading.angles(), palette, panes), dial_area);
    }

    if let Some(digital_area) = areas.digital {
        let time = panes.digital_time.then(|| clock::format_time(&now));
        let date = panes.digital_date.then(|| clock::format_date(&now));
        frame.render_widget(
            DigitalReadout::new(time.as_deref(), date.as_deref(), palette),
            digital_area,
        );
    }

    if let Some(bar_area) = areas.theme_bar {
        frame.render_widget(ThemeBar::new(state.active_theme_index(), palette), bar_area);
        hits.theme_entries = ThemeBar::entry_areas(bar_area)
            .into_iter()
            .zip(tempus_core::KNOWN_THEMES)
            .map(|(rect, name)| (name.to_string(), rect))
            .collect();
    }

    frame.render_widget(
        StatusBar::new(palette, panes.theme_bar, panes.mode_switch),
        areas.status,
    );
}
