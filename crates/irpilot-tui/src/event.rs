//! Terminal event polling

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};

use irpilot_app::{InputKey, Message};
use irpilot_core::Result;

/// Poll for terminal events with timeout.
///
/// The 50ms timeout doubles as the animation/toast-expiry tick: when no key
/// arrives in time, a [`Message::Tick`] is produced instead.
pub fn poll() -> Result<Option<Message>> {
    if event::poll(Duration::from_millis(50))? {
        match event::read()? {
            Event::Key(key) if key.kind == event::KeyEventKind::Press => {
                Ok(map_key(key).map(Message::Key))
            }
            _ => Ok(None),
        }
    } else {
        Ok(Some(Message::Tick))
    }
}

/// Convert a crossterm key event into the terminal-agnostic `InputKey`.
fn map_key(key: KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Backspace => Some(InputKey::Backspace),
        KeyCode::Delete => Some(InputKey::Delete),
        _ => None,
    }
}
