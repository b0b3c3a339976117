//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// One-second timer fired; redraw with a fresh clock reading
    Tick,

    /// Quit the application (q, Esc, Ctrl+C, SIGINT/SIGTERM)
    Quit,

    /// Flip the dark/light mode and persist the result
    ToggleMode,

    /// Apply a theme by name and persist it
    ///
    /// Unknown names are applied as-is; rendering degrades to the default
    /// palette and no theme-bar entry is marked active.
    ApplyTheme { name: String },
}
