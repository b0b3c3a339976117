//! Screen layout computation
//!
//! Splits the terminal into pane areas. Absent panes get no area at all,
//! and the remaining panes absorb the space.

use ratatui::layout::{Constraint, Layout, Rect};

use tempus_app::PaneSet;

use crate::widgets::{SWITCH_HEIGHT, SWITCH_WIDTH};

/// Resolved screen areas for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    pub mode_switch: Option<Rect>,
    pub dial: Option<Rect>,
    pub digital: Option<Rect>,
    pub theme_bar: Option<Rect>,
    pub status: Rect,
}

/// Compute pane areas for the given terminal area and pane set
pub fn compute(area: Rect, panes: &PaneSet) -> ScreenAreas {
    let digital_lines = u16::from(panes.digital_time) + u16::from(panes.digital_date);

    let mut constraints = Vec::new();
    let switch_row = panes.mode_switch.then(|| {
        constraints.push(Constraint::Length(SWITCH_HEIGHT));
        constraints.len() - 1
    });
    let dial_row = panes.has_analog().then(|| {
        constraints.push(Constraint::Min(5));
        constraints.len() - 1
    });
    let digital_row = panes.has_digital().then(|| {
        constraints.push(Constraint::Length(digital_lines));
        constraints.len() - 1
    });
    let theme_row = panes.theme_bar.then(|| {
        constraints.push(Constraint::Length(1));
        constraints.len() - 1
    });
    constraints.push(Constraint::Length(1));
    let status_row = constraints.len() - 1;

    let rows = Layout::vertical(constraints).split(area);

    let mode_switch = switch_row.map(|i| {
        let row = rows[i];
        // Right-aligned button within its row
        let width = SWITCH_WIDTH.min(row.width);
        Rect::new(row.right() - width, row.y, width, row.height)
    });

    ScreenAreas {
        mode_switch,
        dial: dial_row.map(|i| rows[i]),
        digital: digital_row.map(|i| rows[i]),
        theme_bar: theme_row.map(|i| rows[i]),
        status: rows[status_row],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_panes_present() {
        let areas = compute(Rect::new(0, 0, 80, 24), &PaneSet::default());
        assert!(areas.mode_switch.is_some());
        assert!(areas.dial.is_some());
        assert!(areas.digital.is_some());
        assert!(areas.theme_bar.is_some());
        assert!(areas.status.height == 1);
    }

    #[test]
    fn test_absent_panes_get_no_area() {
        let panes = PaneSet {
            hour_hand: false,
            minute_hand: false,
            second_hand: false,
            theme_bar: false,
            ..PaneSet::default()
        };
        let areas = compute(Rect::new(0, 0, 80, 24), &panes);
        assert!(areas.dial.is_none());
        assert!(areas.theme_bar.is_none());
        assert!(areas.mode_switch.is_some());
        assert!(areas.digital.is_some());
    }

    #[test]
    fn test_digital_row_shrinks_to_present_lines() {
        let panes = PaneSet {
            digital_date: false,
            ..PaneSet::default()
        };
        let areas = compute(Rect::new(0, 0, 80, 24), &panes);
        assert_eq!(areas.digital.unwrap().height, 1);
    }

    #[test]
    fn test_digital_row_absent_when_both_lines_off() {
        let panes = PaneSet {
            digital_time: false,
            digital_date: false,
            ..PaneSet::default()
        };
        let areas = compute(Rect::new(0, 0, 80, 24), &panes);
        assert!(areas.digital.is_none());
    }

    #[test]
    fn test_mode_switch_is_right_aligned() {
        let area = Rect::new(0, 0, 80, 24);
        let areas = compute(area, &PaneSet::default());
        let switch = areas.mode_switch.unwrap();
        assert_eq!(switch.right(), area.right());
        assert_eq!(switch.width, SWITCH_WIDTH);
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let _ = compute(Rect::new(0, 0, 5, 2), &PaneSet::default());
        let _ = compute(Rect::new(0, 0, 0, 0), &PaneSet::default());
    }
}
