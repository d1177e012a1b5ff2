//! Typed modal dialogs.
//!
//! A single `Option<Dialog>` slot in the application state holds the
//! foreground dialog. Opening while one is open replaces it in place; two
//! simultaneous dialogs are unrepresentable. Esc always dismisses (for
//! `Recording` that runs the capture-cancel cleanup).

use irpilot_core::{ButtonId, RemoteId};

/// Editable single-line text input for name dialogs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameInput {
    pub value: String,
}

impl NameInput {
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn insert(&mut self, c: char) {
        self.value.push(c);
    }

    pub fn backspace(&mut self) {
        self.value.pop();
    }
}

/// The foreground dialog variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dialog {
    AddRemote {
        input: NameInput,
    },
    AddButton {
        remote_id: RemoteId,
        input: NameInput,
    },
    EditButton {
        remote_id: RemoteId,
        button_id: ButtonId,
        input: NameInput,
    },
    ConfirmDeleteRemote {
        remote_id: RemoteId,
    },
    ConfirmDeleteButton {
        remote_id: RemoteId,
        button_id: ButtonId,
    },
    Recording {
        remote_id: RemoteId,
        button_id: ButtonId,
    },
}

impl Dialog {
    pub fn title(&self) -> &'static str {
        match self {
            Dialog::AddRemote { .. } => "New Remote",
            Dialog::AddButton { .. } => "New Button",
            Dialog::EditButton { .. } => "Rename Button",
            Dialog::ConfirmDeleteRemote { .. } => "Delete Remote",
            Dialog::ConfirmDeleteButton { .. } => "Delete Button",
            Dialog::Recording { .. } => "Recording Signal",
        }
    }

    /// Dialogs that route character keys into a text field.
    pub fn accepts_text(&self) -> bool {
        matches!(
            self,
            Dialog::AddRemote { .. } | Dialog::AddButton { .. } | Dialog::EditButton { .. }
        )
    }

    pub fn is_recording(&self) -> bool {
        matches!(self, Dialog::Recording { .. })
    }

    /// Mutable access to the text field, when this dialog has one.
    pub fn input_mut(&mut self) -> Option<&mut NameInput> {
        match self {
            Dialog::AddRemote { input }
            | Dialog::AddButton { input, .. }
            | Dialog::EditButton { input, .. } => Some(input),
            _ => None,
        }
    }

    /// Current text field contents, when this dialog has one.
    pub fn input_value(&self) -> Option<&str> {
        match self {
            Dialog::AddRemote { input }
            | Dialog::AddButton { input, .. }
            | Dialog::EditButton { input, .. } => Some(&input.value),
            _ => None,
        }
    }
}
