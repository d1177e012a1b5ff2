//! Key event handlers - map keys to messages per screen and dialog

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Screen};

/// Map a key to a message given the current state.
///
/// An open dialog captures all input; otherwise keys dispatch per screen.
pub(crate) fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    if let InputKey::CharCtrl('c') = key {
        return Some(Message::Quit);
    }

    if let Some(dialog) = &state.dialog {
        return handle_dialog_key(dialog.accepts_text(), key);
    }

    match state.screen {
        Screen::Home => handle_home_key(key),
        Screen::ViewRemote => handle_view_key(key),
        Screen::EditRemote => handle_edit_key(key),
    }
}

fn handle_dialog_key(accepts_text: bool, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::DialogCancel),
        InputKey::Enter => Some(Message::DialogSubmit),
        InputKey::Backspace | InputKey::Delete if accepts_text => Some(Message::DialogBackspace),
        InputKey::Char(c) if accepts_text => Some(Message::DialogInput(c)),
        // Confirm dialogs also accept y/n shortcuts
        InputKey::Char('y') => Some(Message::DialogSubmit),
        InputKey::Char('n') => Some(Message::DialogCancel),
        _ => None,
    }
}

fn handle_home_key(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),
        InputKey::Up | InputKey::Char('k') => Some(Message::SelectionUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::SelectionDown),
        InputKey::Enter => Some(Message::ViewSelectedRemote),
        InputKey::Char('e') => Some(Message::EditSelectedRemote),
        InputKey::Char('a') => Some(Message::OpenAddRemoteDialog),
        InputKey::Char('d') | InputKey::Delete => Some(Message::OpenDeleteRemoteDialog),
        InputKey::Char('r') => Some(Message::GoHome),
        _ => None,
    }
}

fn handle_view_key(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') => Some(Message::Quit),
        InputKey::Esc | InputKey::Char('h') => Some(Message::GoHome),
        InputKey::Up | InputKey::Char('k') => Some(Message::SelectionUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::SelectionDown),
        InputKey::Enter | InputKey::Char(' ') => Some(Message::SendSelectedSignal),
        InputKey::Char('e') => Some(Message::EditCurrentRemote),
        _ => None,
    }
}

fn handle_edit_key(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') => Some(Message::Quit),
        InputKey::Esc | InputKey::Char('h') => Some(Message::GoHome),
        InputKey::Up | InputKey::Char('k') => Some(Message::SelectionUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::SelectionDown),
        InputKey::Char('a') => Some(Message::OpenAddButtonDialog),
        InputKey::Enter | InputKey::Char('e') => Some(Message::OpenEditButtonDialog),
        InputKey::Char('d') | InputKey::Delete => Some(Message::OpenDeleteButtonDialog),
        InputKey::Char('r') => Some(Message::StartCaptureForSelected),
        InputKey::Char('v') => Some(Message::ViewCurrentRemote),
        _ => None,
    }
}
