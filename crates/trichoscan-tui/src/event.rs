//! Terminal event polling

use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use std::time::Duration;
use trichoscan_app::message::Message;
use trichoscan_app::InputKey;
use trichoscan_core::prelude::*;

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: crossterm::event::KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Tab => Some(InputKey::Tab),
        KeyCode::Backspace => Some(InputKey::Backspace),
        _ => None, // Unsupported keys ignored
    }
}

/// Poll for terminal events, waiting at most `tick_rate`.
///
/// A timeout yields `Message::Tick`, which drives the scan-line animation.
/// Pasted text (bracketed paste) is forwarded whole as
/// `Message::PromptPaste`, so a dropped file path lands in the prompt
/// without being read as key presses.
pub fn poll(tick_rate: Duration) -> Result<Vec<Message>> {
    if !event::poll(tick_rate)? {
        return Ok(vec![Message::Tick]);
    }

    let messages = match event::read()? {
        Event::Key(key) if key.kind == event::KeyEventKind::Press => key_event_to_input(key)
            .map(|k| vec![Message::Key(k)])
            .unwrap_or_default(),
        Event::Paste(text) => vec![Message::PromptPaste(text)],
        _ => Vec::new(),
    };
    Ok(messages)
}
