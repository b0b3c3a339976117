//! Application state: the clock widget instance
//!
//! [`ClockState`] is the single explicit owner of everything the old
//! page-global approach would scatter: the active theme, the dark flag,
//! the mode-switch label, the pane set, and the injected preference
//! store. Constructing one restores persisted preferences; all mutation
//! goes through its methods, invoked from the update function.

use tempus_core::prelude::*;
use tempus_core::{Mode, DEFAULT_THEME, KNOWN_THEMES};

use crate::config::PaneSet;
use crate::prefs::{PrefStore, MODE_KEY, THEME_KEY};

/// The clock widget: theme/mode controller state plus pane wiring
pub struct ClockState {
    /// Active theme name. May be an unknown name restored from the store;
    /// rendering then degrades to the default palette.
    theme: String,
    mode: Mode,
    /// Mode-switch label. Names the *next* action, not the current state.
    mode_switch_label: &'static str,
    panes: PaneSet,
    should_quit: bool,
    store: Box<dyn PrefStore>,
}

impl ClockState {
    /// Construct the widget, restoring persisted preferences
    ///
    /// The restored (or default) theme is re-applied, which also persists
    /// it; the mode-switch label is synced from the restored mode without
    /// toggling anything. Absent panes are reported once here.
    pub fn new(store: Box<dyn PrefStore>, panes: PaneSet) -> Self {
        panes.log_missing();

        let mut state = Self {
            theme: String::new(),
            mode: Mode::from_persisted(store.get(MODE_KEY).as_deref()),
            mode_switch_label: Mode::default().switch_label(),
            panes,
            should_quit: false,
            store,
        };

        let restored = state
            .store
            .get(THEME_KEY)
            .unwrap_or_else(|| DEFAULT_THEME.to_string());
        state.apply_theme(&restored);
        state.sync_mode_switch_label();

        info!(
            "Clock widget ready: theme={}, mode={}",
            state.theme,
            state.mode.as_persisted()
        );
        state
    }

    /// Apply a theme by name, persist it, and recompute the active marker
    ///
    /// No constraint on `name` beyond matching a theme-bar entry; unknown
    /// names are kept as-is and simply match nothing.
    pub fn apply_theme(&mut self, name: &str) {
        self.theme = name.to_string();
        self.store.set(THEME_KEY, name);
        debug!("Theme applied: {}", name);
    }

    /// Flip dark/light, update the switch label, persist the new mode
    ///
    /// A no-op when the mode switch pane is absent, matching the wiring
    /// policy for missing controls.
    pub fn toggle_mode(&mut self) {
        if !self.panes.mode_switch {
            return;
        }
        self.mode = self.mode.toggled();
        self.mode_switch_label = self.mode.switch_label();
        self.store.set(MODE_KEY, self.mode.as_persisted());
        debug!("Mode toggled: {}", self.mode.as_persisted());
    }

    /// Set the switch label from current state without changing state
    pub fn sync_mode_switch_label(&mut self) {
        if !self.panes.mode_switch {
            return;
        }
        self.mode_switch_label = self.mode.switch_label();
    }

    /// Index into [`KNOWN_THEMES`] of the entry bearing the active marker,
    /// or `None` when the current theme matches no entry
    pub fn active_theme_index(&self) -> Option<usize> {
        KNOWN_THEMES.iter().position(|t| *t == self.theme)
    }

    pub fn theme(&self) -> &str {
        &self.theme
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn mode_switch_label(&self) -> &'static str {
        self.mode_switch_label
    }

    pub fn panes(&self) -> &PaneSet {
        &self.panes
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    #[cfg(test)]
    pub(crate) fn store(&self) -> &dyn PrefStore {
        self.store.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::MemoryPrefStore;

    fn fresh_state() -> ClockState {
        ClockState::new(Box::new(MemoryPrefStore::new()), PaneSet::default())
    }

    #[test]
    fn test_startup_applies_default_theme_and_marks_active() {
        let state = fresh_state();
        assert_eq!(state.theme(), DEFAULT_THEME);
        assert_eq!(state.active_theme_index(), Some(0));
        // Startup apply also persists the default
        assert_eq!(
            state.store().get(THEME_KEY),
            Some(DEFAULT_THEME.to_string())
        );
    }

    #[test]
    fn test_startup_restores_persisted_theme() {
        let mut store = MemoryPrefStore::new();
        store.set(THEME_KEY, "forest");

        let state = ClockState::new(Box::new(store), PaneSet::default());
        assert_eq!(state.theme(), "forest");
        assert_eq!(state.active_theme_index(), Some(2));
    }

    #[test]
    fn test_startup_with_dark_mode_syncs_label_without_click() {
        let mut store = MemoryPrefStore::new();
        store.set(MODE_KEY, "Dark Mode");

        let state = ClockState::new(Box::new(store), PaneSet::default());
        assert!(state.mode().is_dark());
        assert_eq!(state.mode_switch_label(), "Light Mode");
    }

    #[test]
    fn test_apply_theme_persists_exact_name() {
        let mut state = fresh_state();
        state.apply_theme("sunset");

        assert_eq!(state.store().get(THEME_KEY), Some("sunset".to_string()));
        assert_eq!(state.active_theme_index(), Some(1));
    }

    #[test]
    fn test_unknown_theme_applied_as_is_with_no_active_entry() {
        let mut state = fresh_state();
        state.apply_theme("lavender");

        assert_eq!(state.theme(), "lavender");
        assert_eq!(state.active_theme_index(), None);
        // Silent degradation: the unknown name is persisted verbatim
        assert_eq!(state.store().get(THEME_KEY), Some("lavender".to_string()));
    }

    #[test]
    fn test_toggle_mode_twice_is_a_round_trip() {
        let mut state = fresh_state();
        let initial_mode = state.mode();
        let initial_persisted = state.store().get(MODE_KEY);

        state.toggle_mode();
        assert!(state.mode().is_dark());
        assert_eq!(state.mode_switch_label(), "Light Mode");
        assert_eq!(state.store().get(MODE_KEY), Some("Dark Mode".to_string()));

        state.toggle_mode();
        assert_eq!(state.mode(), initial_mode);
        assert_eq!(state.mode_switch_label(), "Dark Mode");
        // Persisted value returns to the light literal (it was absent before
        // the first toggle, and absent means light)
        assert_eq!(state.store().get(MODE_KEY), Some("Light Mode".to_string()));
        assert_eq!(
            Mode::from_persisted(state.store().get(MODE_KEY).as_deref()),
            Mode::from_persisted(initial_persisted.as_deref())
        );
    }

    #[test]
    fn test_toggle_mode_skipped_without_mode_switch_pane() {
        let panes = PaneSet {
            mode_switch: false,
            ..PaneSet::default()
        };
        let mut state = ClockState::new(Box::new(MemoryPrefStore::new()), panes);

        state.toggle_mode();
        assert!(!state.mode().is_dark());
        assert_eq!(state.store().get(MODE_KEY), None);

        // Everything else keeps working
        state.apply_theme("sunset");
        assert_eq!(state.theme(), "sunset");
    }
}
