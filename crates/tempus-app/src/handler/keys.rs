//! Key event handling
//!
//! Maps abstract input keys to semantic messages. Enter and Space act on
//! the mode switch; digits and arrow keys act on the theme bar. Keys for
//! an absent pane map to nothing at all.

use tempus_core::KNOWN_THEMES;

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::ClockState;

/// Convert a key event to a message based on current state
pub fn handle_key(state: &ClockState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc | InputKey::CharCtrl('c') => Some(Message::Quit),

        // Enter or Space activates the mode switch
        InputKey::Enter | InputKey::Char(' ') => {
            if state.panes().mode_switch {
                Some(Message::ToggleMode)
            } else {
                None
            }
        }

        // Digits 1..N select a theme-bar entry directly
        InputKey::Char(c @ '1'..='9') => {
            if !state.panes().theme_bar {
                return None;
            }
            let index = (c as usize) - ('1' as usize);
            KNOWN_THEMES.get(index).map(|name| Message::ApplyTheme {
                name: (*name).to_string(),
            })
        }

        // Arrow keys cycle through the theme bar
        InputKey::Left => cycle_theme(state, -1),
        InputKey::Right => cycle_theme(state, 1),

        _ => None,
    }
}

/// Select the previous/next theme relative to the active entry
///
/// An unknown active theme has no entry, so cycling starts from the first.
fn cycle_theme(state: &ClockState, step: isize) -> Option<Message> {
    if !state.panes().theme_bar {
        return None;
    }
    let len = KNOWN_THEMES.len() as isize;
    let next = match state.active_theme_index() {
        Some(current) => (current as isize + step).rem_euclid(len),
        None => 0,
    };
    Some(Message::ApplyTheme {
        name: KNOWN_THEMES[next as usize].to_string(),
    })
}
