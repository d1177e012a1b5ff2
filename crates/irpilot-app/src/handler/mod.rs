//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key-to-message mapping per screen and dialog

pub(crate) mod keys;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use tokio::sync::watch;

use irpilot_core::{ButtonId, RemoteId};

use crate::message::{Message, RefreshReason};

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update.
///
/// Each variant becomes one background task; results come back as
/// [`Message`]s over the unified channel.
#[derive(Debug, Clone)]
pub enum UpdateAction {
    /// Fetch the remote list, replacing the mirror wholesale on success
    LoadRemotes { reason: RefreshReason },

    /// Create a remote
    AddRemote { name: String },

    /// Delete a remote and all its buttons
    DeleteRemote { remote_id: RemoteId },

    /// Create a button
    AddButton { remote_id: RemoteId, name: String },

    /// Rename a button
    EditButton {
        remote_id: RemoteId,
        button_id: ButtonId,
        name: String,
    },

    /// Delete a button
    DeleteButton {
        remote_id: RemoteId,
        button_id: ButtonId,
    },

    /// Replay a captured signal
    SendSignal {
        remote_id: RemoteId,
        button_id: ButtonId,
    },

    /// Ask the device to enter capture mode
    StartCapture {
        remote_id: RemoteId,
        button_id: ButtonId,
    },

    /// Spawn the capture poll task.
    ///
    /// The shutdown receiver pairs with the sender owned by the
    /// `CaptureSession` in state; `generation` tags every tick message the
    /// task sends so stale sessions cannot be confused with live ones.
    SpawnCapturePoll {
        remote_id: RemoteId,
        button_id: ButtonId,
        generation: u64,
        poll_interval_ms: u64,
        shutdown_rx: watch::Receiver<bool>,
    },

    /// Capture teardown: issue the idempotent stop request, then refresh
    /// the list and re-select the owning remote's Edit screen.
    FinishCapture { remote_id: RemoteId },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
