//! tempus - a themeable terminal desk clock
//!
//! This is the binary entry point. All logic lives in the workspace
//! crates; main only parses arguments, wires up logging and the
//! preference store, and hands off to the TUI runner.

use std::path::PathBuf;

use clap::Parser;

use tempus_app::{load_settings, ClockState, FilePrefStore, MemoryPrefStore, PrefStore};
use tempus_core::prelude::*;

/// tempus - a themeable terminal desk clock
#[derive(Parser, Debug)]
#[command(name = "tempus")]
#[command(about = "A themeable terminal desk clock", long_about = None)]
struct Args {
    /// Directory holding config.toml and prefs.toml
    /// (defaults to the platform config directory)
    #[arg(long, value_name = "DIR")]
    config: Option<PathBuf>,

    /// Keep preferences in memory only; nothing is persisted
    #[arg(long)]
    ephemeral: bool,

    /// Apply a theme at startup (persisted like any selection)
    #[arg(long, value_name = "NAME")]
    theme: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tempus_core::logging::init()?;

    let config_dir = args.config.unwrap_or_else(FilePrefStore::default_dir);
    let settings = load_settings(&config_dir);

    let store: Box<dyn PrefStore> = if args.ephemeral {
        info!("Running ephemeral: preferences will not be persisted");
        Box::new(MemoryPrefStore::new())
    } else {
        Box::new(FilePrefStore::open(&config_dir))
    };

    let mut state = ClockState::new(store, settings.panes);
    if let Some(theme) = args.theme {
        state.apply_theme(&theme);
    }

    tempus_tui::run(state).await
}
