//! Key event handlers per scan phase

use std::path::PathBuf;

use crate::config::expand_home;
use crate::handler::UpdateResult;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::AppState;
use trichoscan_core::ScanPhase;

/// Convert key events to messages based on the current phase
pub fn handle_key(state: &mut AppState, key: InputKey) -> UpdateResult {
    // Ctrl+C always quits
    if key == InputKey::CharCtrl('c') {
        return UpdateResult::message(Message::Quit);
    }

    match state.phase {
        ScanPhase::Idle => handle_key_idle(state, key),
        ScanPhase::Scanning | ScanPhase::Analyzing => handle_key_scanning(key),
        ScanPhase::Results => handle_key_results(key),
        ScanPhase::Error => handle_key_error(key),
    }
}

/// Idle: the path prompt has focus, so printable keys are text
fn handle_key_idle(state: &mut AppState, key: InputKey) -> UpdateResult {
    match key {
        InputKey::Char(c) => {
            state.path_input.push(c);
            UpdateResult::none()
        }
        InputKey::Backspace => {
            state.path_input.pop();
            UpdateResult::none()
        }
        // Ctrl+U clears the line, as in a shell
        InputKey::CharCtrl('u') => {
            state.path_input.clear();
            UpdateResult::none()
        }
        InputKey::Esc if state.path_input.is_empty() => UpdateResult::message(Message::Quit),
        InputKey::Esc => {
            state.path_input.clear();
            UpdateResult::none()
        }
        InputKey::Enter => match prompt_path(&state.path_input) {
            Some(path) => UpdateResult::message(Message::OpenImageFile { path }),
            None => UpdateResult::none(),
        },
        _ => UpdateResult::none(),
    }
}

/// Pasted text goes into the path prompt in Idle and is dropped elsewhere.
///
/// Control characters (the trailing newline of a dropped file) are skipped,
/// so a paste never submits the prompt.
pub fn handle_paste(state: &mut AppState, text: &str) -> UpdateResult {
    if state.phase != ScanPhase::Idle {
        return UpdateResult::none();
    }
    state
        .path_input
        .extend(text.chars().filter(|c| !c.is_control()));
    UpdateResult::none()
}

fn handle_key_scanning(key: InputKey) -> UpdateResult {
    match key {
        InputKey::Char('q') => UpdateResult::message(Message::Quit),
        _ => UpdateResult::none(),
    }
}

fn handle_key_results(key: InputKey) -> UpdateResult {
    match key {
        InputKey::Char('e') => UpdateResult::message(Message::ExportReport),
        other => handle_key_error(other),
    }
}

fn handle_key_error(key: InputKey) -> UpdateResult {
    match key {
        InputKey::Char('n') | InputKey::Char('r') | InputKey::Enter => {
            UpdateResult::message(Message::Reset)
        }
        InputKey::Char('q') => UpdateResult::message(Message::Quit),
        _ => UpdateResult::none(),
    }
}

/// Turn prompt text into a path: trims whitespace and the quotes terminals
/// add when a file is dropped, and expands `~/`.
fn prompt_path(input: &str) -> Option<PathBuf> {
    let trimmed = input.trim();
    let unquoted = ['"', '\'']
        .iter()
        .find_map(|q| {
            trimmed
                .strip_prefix(*q)
                .and_then(|rest| rest.strip_suffix(*q))
        })
        .unwrap_or(trimmed)
        .trim();

    if unquoted.is_empty() {
        None
    } else {
        Some(expand_home(unquoted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_path_trims_and_unquotes() {
        assert_eq!(prompt_path("  "), None);
        assert_eq!(prompt_path("''"), None);
        assert_eq!(
            prompt_path(" '/tmp/my scan.png' "),
            Some(PathBuf::from("/tmp/my scan.png"))
        );
        assert_eq!(
            prompt_path("\"/tmp/a.jpg\""),
            Some(PathBuf::from("/tmp/a.jpg"))
        );
        assert_eq!(prompt_path("/tmp/b.png"), Some(PathBuf::from("/tmp/b.png")));
    }
}
