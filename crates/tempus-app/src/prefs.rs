//! Preference persistence behind a small capability trait
//!
//! Two string preferences survive restarts: the theme name and the mode.
//! The trait keeps the rest of the app independent of where they live, so
//! tests (and `--ephemeral` runs) substitute [`MemoryPrefStore`] for the
//! TOML-file-backed [`FilePrefStore`].

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tempus_core::prelude::*;

/// Persisted key for the selected theme name
pub const THEME_KEY: &str = "theme";

/// Persisted key for the light/dark mode
pub const MODE_KEY: &str = "mode";

const PREFS_FILENAME: &str = "prefs.toml";

/// Capability interface for preference persistence
pub trait PrefStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// Preference store backed by a flat TOML table on disk
///
/// `set` rewrites the whole file synchronously. Write failures are logged
/// and otherwise ignored: losing a preference write is not worth
/// interrupting the clock for.
pub struct FilePrefStore {
    path: PathBuf,
    table: BTreeMap<String, String>,
}

impl FilePrefStore {
    /// Open (or start empty) the store at `<dir>/prefs.toml`
    ///
    /// An unreadable or unparseable file degrades to an empty table with a
    /// warning, so every preference falls back to its default.
    pub fn open(dir: &Path) -> Self {
        let path = dir.join(PREFS_FILENAME);
        let table = match std::fs::read_to_string(&path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(table) => {
                    debug!("Loaded preferences from {:?}", path);
                    table
                }
                Err(e) => {
                    warn!("Failed to parse {:?}: {}", path, e);
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No preference file at {:?}, starting empty", path);
                BTreeMap::new()
            }
            Err(e) => {
                warn!("Failed to read {:?}: {}", path, e);
                BTreeMap::new()
            }
        };

        Self { path, table }
    }

    /// Platform-default preference directory (`<config_dir>/tempus`)
    pub fn default_dir() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        base.join("tempus")
    }

    fn write_out(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::prefs(format!("Failed to create {:?}: {}", parent, e)))?;
        }
        let content = toml::to_string(&self.table)
            .map_err(|e| Error::prefs(format!("Failed to serialize preferences: {}", e)))?;
        std::fs::write(&self.path, content)
            .map_err(|e| Error::prefs(format!("Failed to write {:?}: {}", self.path, e)))?;
        Ok(())
    }
}

impl PrefStore for FilePrefStore {
    fn get(&self, key: &str) -> Option<String> {
        self.table.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.table.insert(key.to_string(), value.to_string());
        if let Err(e) = self.write_out() {
            warn!("Preference write skipped: {}", e);
        }
    }
}

/// In-memory preference store for tests and ephemeral runs
#[derive(Debug, Default)]
pub struct MemoryPrefStore {
    table: BTreeMap<String, String>,
}

impl MemoryPrefStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PrefStore for MemoryPrefStore {
    fn get(&self, key: &str) -> Option<String> {
        self.table.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.table.insert(key.to_string(), value.to_string());
    }
}
