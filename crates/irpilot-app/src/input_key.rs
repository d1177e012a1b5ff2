//! Abstract input key event, independent of terminal library.
//!
//! Converted from `crossterm::event::KeyEvent` at the TUI boundary so this
//! crate stays free of terminal-specific types.

/// Abstract input key event, independent of terminal library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKey {
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+c, etc.)
    CharCtrl(char),

    /// Up arrow key
    Up,
    /// Down arrow key
    Down,

    /// Enter/Return key
    Enter,
    /// Escape key
    Esc,
    /// Backspace key
    Backspace,
    /// Delete key
    Delete,
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
