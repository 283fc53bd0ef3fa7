//! Semantic style builders.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};
use trichoscan_core::{clamp_score, ScanPhase};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn section_title() -> Style {
    Style::default()
        .fg(palette::TEXT_SECONDARY)
        .add_modifier(Modifier::BOLD)
}

// --- Status styles ---
pub fn status_red() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

pub fn status_yellow() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

// --- Keybinding hint style ---
pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused {
            palette::BORDER_ACTIVE
        } else {
            palette::BORDER_DIM
        }))
        .style(Style::default().bg(palette::CARD_BG))
}

/// Glass block with a title in the section style
pub fn titled_block(title: &str, focused: bool) -> Block<'static> {
    glass_block(focused).title(ratatui::text::Span::styled(
        format!(" {} ", title),
        section_title(),
    ))
}

// --- Phase indicator mapping ---

/// Status dot and style for the header.
///
/// Returns `(icon_char, Style)` for the given phase; the label comes from
/// [`ScanPhase::label`].
pub fn phase_indicator(phase: ScanPhase) -> (&'static str, Style) {
    match phase {
        ScanPhase::Idle => ("○", Style::default().fg(palette::TEXT_MUTED)),
        ScanPhase::Scanning => (
            "◉",
            Style::default()
                .fg(palette::ACCENT)
                .add_modifier(Modifier::BOLD),
        ),
        ScanPhase::Analyzing => (
            "◉",
            Style::default()
                .fg(palette::STATUS_BLUE)
                .add_modifier(Modifier::BOLD),
        ),
        ScanPhase::Results => (
            "●",
            Style::default()
                .fg(palette::STATUS_GREEN)
                .add_modifier(Modifier::BOLD),
        ),
        ScanPhase::Error => ("✗", Style::default().fg(palette::STATUS_RED)),
    }
}

/// Color a score: green from 75, yellow from 50, red below
pub fn score_style(value: f64) -> Style {
    let value = clamp_score(value);
    let color = if value >= 75.0 {
        palette::STATUS_GREEN
    } else if value >= 50.0 {
        palette::STATUS_YELLOW
    } else {
        palette::STATUS_RED
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}
