//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::ClockState;

use super::{keys::handle_key, UpdateResult};

/// Process a message and update state
///
/// Returns an optional follow-up message (key events resolve to semantic
/// messages the caller feeds back in).
pub fn update(state: &mut ClockState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        // The clock reading is derived at render time; the tick only
        // triggers a redraw.
        Message::Tick => UpdateResult::none(),

        Message::ToggleMode => {
            state.toggle_mode();
            UpdateResult::none()
        }

        Message::ApplyTheme { name } => {
            state.apply_theme(&name);
            UpdateResult::none()
        }
    }
}
