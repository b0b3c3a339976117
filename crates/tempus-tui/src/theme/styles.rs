//! Semantic style builders over the active palette.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette::Palette;

// --- Text styles ---
pub fn text_primary(p: &Palette) -> Style {
    Style::default().fg(p.text)
}

pub fn text_muted(p: &Palette) -> Style {
    Style::default().fg(p.text_muted)
}

pub fn accent(p: &Palette) -> Style {
    Style::default().fg(p.accent)
}

pub fn accent_bold(p: &Palette) -> Style {
    Style::default().fg(p.accent).add_modifier(Modifier::BOLD)
}

/// Big digital time readout
pub fn digits(p: &Palette) -> Style {
    Style::default().fg(p.text).add_modifier(Modifier::BOLD)
}

// --- Theme-bar entries ---
pub fn entry_active(p: &Palette) -> Style {
    Style::default()
        .fg(p.bg)
        .bg(p.accent)
        .add_modifier(Modifier::BOLD)
}

pub fn entry_inactive(p: &Palette) -> Style {
    Style::default().fg(p.text_muted).bg(p.surface)
}

// --- Blocks ---
/// Rounded bordered card on the surface color
pub fn card_block(p: &Palette) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(p.dial))
        .style(Style::default().bg(p.surface))
}

/// Card variant with the accent border (the mode switch)
pub fn switch_block(p: &Palette) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(accent(p))
        .style(Style::default().bg(p.surface))
}
