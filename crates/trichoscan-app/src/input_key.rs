//! Abstract input key event, independent of terminal library.
//!
//! Keeps trichoscan-app free of crossterm types so the headless runner can
//! drive the same engine. The TUI converts `crossterm::event::KeyEvent` into
//! an `InputKey` at its boundary.

/// Abstract input key event, independent of terminal library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKey {
    /// Regular character key (a-z, 0-9, symbols, path separators)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+c, Ctrl+u, ...)
    CharCtrl(char),

    Enter,
    Esc,
    Backspace,
    Tab,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_key_equality() {
        assert_eq!(InputKey::Char('a'), InputKey::Char('a'));
        assert_ne!(InputKey::Char('a'), InputKey::Char('b'));
        assert_ne!(InputKey::CharCtrl('c'), InputKey::Char('c'));
    }
}
