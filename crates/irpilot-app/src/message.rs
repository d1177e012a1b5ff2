//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use irpilot_core::{ButtonId, Remote, RemoteId};

/// Why a remote-list fetch was issued. Carried through the background task
/// and back in [`Message::RemotesLoaded`] so the handler knows what to do
/// with the fresh list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshReason {
    /// Populate the Home screen.
    Home,
    /// Re-select this remote from the fresh list and show its Edit screen.
    ReselectEdit { remote_id: RemoteId },
}

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for toast expiry and animations
    Tick,

    /// Quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────
    /// Go to the Home screen (triggers a fresh list fetch)
    GoHome,
    /// Open the View screen for the remote selected on Home
    ViewSelectedRemote,
    /// Open the Edit screen for the remote selected on Home
    EditSelectedRemote,
    /// Switch from View to Edit for the current remote
    EditCurrentRemote,
    /// Switch from Edit to View for the current remote
    ViewCurrentRemote,
    /// Move the list selection up
    SelectionUp,
    /// Move the list selection down
    SelectionDown,

    // ─────────────────────────────────────────────────────────
    // Dialogs
    // ─────────────────────────────────────────────────────────
    /// Open the add-remote dialog
    OpenAddRemoteDialog,
    /// Open the add-button dialog for the current remote
    OpenAddButtonDialog,
    /// Open the rename dialog for the selected button
    OpenEditButtonDialog,
    /// Ask for confirmation before deleting the selected remote
    OpenDeleteRemoteDialog,
    /// Ask for confirmation before deleting the selected button
    OpenDeleteButtonDialog,
    /// Character input into the open dialog's text field
    DialogInput(char),
    /// Backspace in the open dialog's text field
    DialogBackspace,
    /// Confirm the open dialog (submit name / confirm delete)
    DialogSubmit,
    /// Dismiss the open dialog (cancels capture for Recording)
    DialogCancel,

    // ─────────────────────────────────────────────────────────
    // Device actions
    // ─────────────────────────────────────────────────────────
    /// Replay the selected button's signal (View screen)
    SendSelectedSignal,
    /// Start capturing a signal for the selected button (Edit screen)
    StartCaptureForSelected,

    // ─────────────────────────────────────────────────────────
    // API results
    // ─────────────────────────────────────────────────────────
    /// Fresh remote list fetched; replaces the mirror wholesale
    RemotesLoaded {
        remotes: Vec<Remote>,
        reason: RefreshReason,
    },
    /// Remote created
    RemoteAdded,
    /// Remote deleted
    RemoteDeleted,
    /// Button created on a remote
    ButtonAdded { remote_id: RemoteId },
    /// Button renamed
    ButtonEdited { remote_id: RemoteId },
    /// Button deleted
    ButtonDeleted { remote_id: RemoteId },
    /// Signal replay accepted by the device
    SignalSent,
    /// Any API call failed; the operation did not happen
    ApiFailed { title: String, message: String },

    // ─────────────────────────────────────────────────────────
    // Capture lifecycle
    // ─────────────────────────────────────────────────────────
    /// Device accepted the start-capture request
    CaptureStarted {
        remote_id: RemoteId,
        button_id: ButtonId,
    },
    /// One poll tick result: whether the target button has a signal now.
    /// `generation` identifies the capture session the tick belongs to;
    /// stale generations are discarded.
    CapturePollTick { generation: u64, has_signal: bool },
}
