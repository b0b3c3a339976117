//! tempus-app - Application state and preference handling for tempus
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: a [`ClockState`] holding everything the UI shows, a
//! [`Message`] enum for every event, and an `update` function that applies
//! messages to state. It also owns the preference store and the pane
//! configuration.

pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod prefs;
pub mod state;

// Re-export primary types
pub use config::{load_settings, PaneSet, Settings};
pub use handler::{update, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use prefs::{FilePrefStore, MemoryPrefStore, PrefStore, MODE_KEY, THEME_KEY};
pub use state::ClockState;
