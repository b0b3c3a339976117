//! Terminal setup and restoration

use std::io::stdout;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use tempus_core::prelude::*;

/// Install a panic hook that restores the terminal
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = execute!(stdout(), DisableMouseCapture);
        ratatui::restore();
        original_hook(panic_info);
    }));
}

/// Enable mouse reporting so clicks reach the hit map
///
/// Failure is non-fatal: the keyboard wiring covers every control.
pub fn enable_mouse() {
    if let Err(e) = execute!(stdout(), EnableMouseCapture) {
        warn!("Mouse capture unavailable: {}", e);
    }
}

/// Disable mouse reporting before handing the terminal back
pub fn disable_mouse() {
    let _ = execute!(stdout(), DisableMouseCapture);
}
