//! Integration-style tests for the update function and key handling

use tempus_core::{Mode, DEFAULT_THEME};

use crate::config::PaneSet;
use crate::handler::keys::handle_key;
use crate::handler::update;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::prefs::{MemoryPrefStore, MODE_KEY, THEME_KEY};
use crate::state::ClockState;

fn state_with(panes: PaneSet) -> ClockState {
    ClockState::new(Box::new(MemoryPrefStore::new()), panes)
}

fn state() -> ClockState {
    state_with(PaneSet::default())
}

/// Drive a message through update, following any produced follow-up
fn dispatch(state: &mut ClockState, message: Message) {
    let mut next = Some(message);
    while let Some(msg) = next.take() {
        next = update(state, msg).message;
    }
}

#[test]
fn test_quit_keys() {
    for key in [InputKey::Char('q'), InputKey::Esc, InputKey::CharCtrl('c')] {
        let mut s = state();
        dispatch(&mut s, Message::Key(key));
        assert!(s.should_quit(), "{key:?} should quit");
    }
}

#[test]
fn test_enter_toggles_mode_via_key() {
    let mut s = state();
    dispatch(&mut s, Message::Key(InputKey::Enter));
    assert!(s.mode().is_dark());
    assert_eq!(s.store().get(MODE_KEY), Some("Dark Mode".to_string()));
}

#[test]
fn test_space_toggles_mode_via_key() {
    let mut s = state();
    dispatch(&mut s, Message::Key(InputKey::Char(' ')));
    assert!(s.mode().is_dark());
}

#[test]
fn test_toggle_twice_round_trips_through_update() {
    let mut s = state();
    dispatch(&mut s, Message::ToggleMode);
    dispatch(&mut s, Message::ToggleMode);
    assert_eq!(s.mode(), Mode::Light);
    assert_eq!(
        Mode::from_persisted(s.store().get(MODE_KEY).as_deref()),
        Mode::Light
    );
}

#[test]
fn test_digit_keys_select_themes() {
    let mut s = state();

    dispatch(&mut s, Message::Key(InputKey::Char('2')));
    assert_eq!(s.theme(), "sunset");
    assert_eq!(s.active_theme_index(), Some(1));
    assert_eq!(s.store().get(THEME_KEY), Some("sunset".to_string()));

    dispatch(&mut s, Message::Key(InputKey::Char('3')));
    assert_eq!(s.theme(), "forest");
}

#[test]
fn test_out_of_range_digit_is_ignored() {
    let mut s = state();
    dispatch(&mut s, Message::Key(InputKey::Char('9')));
    assert_eq!(s.theme(), DEFAULT_THEME);
}

#[test]
fn test_arrow_keys_cycle_and_wrap() {
    let mut s = state();
    assert_eq!(s.active_theme_index(), Some(0));

    dispatch(&mut s, Message::Key(InputKey::Right));
    assert_eq!(s.theme(), "sunset");

    dispatch(&mut s, Message::Key(InputKey::Left));
    dispatch(&mut s, Message::Key(InputKey::Left));
    assert_eq!(s.theme(), "forest", "Left from first entry wraps to last");
}

#[test]
fn test_cycle_from_unknown_theme_starts_at_first() {
    let mut s = state();
    dispatch(&mut s, Message::ApplyTheme {
        name: "lavender".to_string(),
    });
    assert_eq!(s.active_theme_index(), None);

    dispatch(&mut s, Message::Key(InputKey::Right));
    assert_eq!(s.theme(), DEFAULT_THEME);
}

#[test]
fn test_mode_keys_ignored_without_mode_switch_pane() {
    let panes = PaneSet {
        mode_switch: false,
        ..PaneSet::default()
    };
    let s = state_with(panes);
    assert_eq!(handle_key(&s, InputKey::Enter), None);
    assert_eq!(handle_key(&s, InputKey::Char(' ')), None);
    // Unrelated keys still work
    assert!(matches!(
        handle_key(&s, InputKey::Char('2')),
        Some(Message::ApplyTheme { .. })
    ));
}

#[test]
fn test_theme_keys_ignored_without_theme_bar_pane() {
    let panes = PaneSet {
        theme_bar: false,
        ..PaneSet::default()
    };
    let s = state_with(panes);
    assert_eq!(handle_key(&s, InputKey::Char('1')), None);
    assert_eq!(handle_key(&s, InputKey::Left), None);
    assert_eq!(handle_key(&s, InputKey::Right), None);
    // The mode switch is unaffected
    assert_eq!(handle_key(&s, InputKey::Enter), Some(Message::ToggleMode));
}

#[test]
fn test_tick_changes_nothing() {
    let mut s = state();
    let theme_before = s.theme().to_string();
    let mode_before = s.mode();

    dispatch(&mut s, Message::Tick);

    assert_eq!(s.theme(), theme_before);
    assert_eq!(s.mode(), mode_before);
    assert!(!s.should_quit());
}

#[test]
fn test_unhandled_keys_produce_nothing() {
    let s = state();
    assert_eq!(handle_key(&s, InputKey::Char('x')), None);
    assert_eq!(handle_key(&s, InputKey::CharCtrl('z')), None);
}
