//! Terminal event polling
//!
//! Keyboard events are converted to the abstract `InputKey`; mouse clicks
//! are resolved against the hit map recorded during the last render, so a
//! click lands exactly on the control that was drawn there.

use crossterm::event::{self, Event, KeyCode, KeyModifiers, MouseButton, MouseEventKind};
use ratatui::layout::{Position, Rect};
use std::time::Duration;

use tempus_app::{InputKey, Message};
use tempus_core::prelude::*;

/// Clickable regions from the last render
#[derive(Debug, Default, Clone)]
pub struct HitMap {
    pub mode_switch: Option<Rect>,
    /// Theme-bar entries as (theme name, rect) in display order
    pub theme_entries: Vec<(String, Rect)>,
}

impl HitMap {
    pub fn clear(&mut self) {
        self.mode_switch = None;
        self.theme_entries.clear();
    }

    /// Resolve a click position to the message its control produces
    pub fn hit_test(&self, column: u16, row: u16) -> Option<Message> {
        let pos = Position::new(column, row);
        if self.mode_switch.is_some_and(|rect| rect.contains(pos)) {
            return Some(Message::ToggleMode);
        }
        self.theme_entries
            .iter()
            .find(|(_, rect)| rect.contains(pos))
            .map(|(name, _)| Message::ApplyTheme { name: name.clone() })
    }
}

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: crossterm::event::KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Left => Some(InputKey::Left),
        KeyCode::Right => Some(InputKey::Right),
        _ => None, // Unsupported keys ignored
    }
}

/// Poll for terminal events with timeout
///
/// Returns `None` on timeout; redraw cadence comes from the tick task,
/// not from here.
pub fn poll(hits: &HitMap) -> Result<Option<Message>> {
    // Poll with 50ms timeout so quit stays responsive
    if event::poll(Duration::from_millis(50))? {
        let event = event::read()?;

        match event {
            Event::Key(key) if key.kind == event::KeyEventKind::Press => {
                Ok(key_event_to_input(key).map(Message::Key))
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                Ok(hits.hit_test(mouse.column, mouse.row))
            }
            _ => Ok(None),
        }
    } else {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    #[test]
    fn test_char_conversion() {
        let key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(key_event_to_input(key), Some(InputKey::Char('q')));
    }

    #[test]
    fn test_char_with_ctrl_conversion() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_event_to_input(key), Some(InputKey::CharCtrl('c')));
    }

    #[test]
    fn test_space_conversion() {
        let key = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE);
        assert_eq!(key_event_to_input(key), Some(InputKey::Char(' ')));
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(
            key_event_to_input(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
            Some(InputKey::Enter)
        );
        assert_eq!(
            key_event_to_input(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)),
            Some(InputKey::Esc)
        );
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(
            key_event_to_input(KeyEvent::new(KeyCode::Left, KeyModifiers::NONE)),
            Some(InputKey::Left)
        );
        assert_eq!(
            key_event_to_input(KeyEvent::new(KeyCode::Right, KeyModifiers::NONE)),
            Some(InputKey::Right)
        );
    }

    #[test]
    fn test_unsupported_key_returns_none() {
        let key = KeyEvent::new(KeyCode::Insert, KeyModifiers::NONE);
        assert_eq!(key_event_to_input(key), None);
    }

    #[test]
    fn test_hit_test_mode_switch() {
        let mut hits = HitMap::default();
        hits.mode_switch = Some(Rect::new(60, 0, 14, 3));

        assert_eq!(hits.hit_test(65, 1), Some(Message::ToggleMode));
        assert_eq!(hits.hit_test(10, 10), None);
    }

    #[test]
    fn test_hit_test_theme_entries() {
        let mut hits = HitMap::default();
        hits.theme_entries = vec![
            ("ocean".to_string(), Rect::new(0, 20, 7, 1)),
            ("sunset".to_string(), Rect::new(8, 20, 8, 1)),
        ];

        assert_eq!(
            hits.hit_test(9, 20),
            Some(Message::ApplyTheme {
                name: "sunset".to_string()
            })
        );
        assert_eq!(
            hits.hit_test(0, 20),
            Some(Message::ApplyTheme {
                name: "ocean".to_string()
            })
        );
        assert_eq!(hits.hit_test(0, 21), None);
    }

    #[test]
    fn test_hit_map_clear() {
        let mut hits = HitMap::default();
        hits.mode_switch = Some(Rect::new(0, 0, 5, 1));
        hits.theme_entries.push(("ocean".to_string(), Rect::new(0, 1, 5, 1)));

        hits.clear();
        assert!(hits.mode_switch.is_none());
        assert!(hits.theme_entries.is_empty());
    }
}
