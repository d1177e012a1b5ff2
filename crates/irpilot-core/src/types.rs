//! Domain model for the IR learning device.
//!
//! The client keeps a server-authoritative mirror of these types: the whole
//! remote list is replaced from the latest successful fetch after every
//! mutation, never patched field-by-field. `Remote` and `Button` therefore
//! deserialize exactly what the device sends and carry no client-local state.

use serde::{Deserialize, Serialize};

/// Server-assigned remote identifier.
pub type RemoteId = u32;

/// Button identifier, unique within its remote.
pub type ButtonId = u32;

/// A named signal slot on a remote.
///
/// `has_signal` is false until a capture completes for this button; it is
/// the only externally observable marker of capture completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Button {
    pub id: ButtonId,
    pub name: String,
    #[serde(default)]
    pub has_signal: bool,
}

/// A named collection of buttons mirroring one physical IR remote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Remote {
    pub id: RemoteId,
    pub name: String,
    #[serde(default)]
    pub buttons: Vec<Button>,
}

impl Remote {
    /// Look up a button by id.
    pub fn button(&self, button_id: ButtonId) -> Option<&Button> {
        self.buttons.iter().find(|b| b.id == button_id)
    }

    /// Number of buttons holding a captured signal.
    pub fn captured_count(&self) -> usize {
        self.buttons.iter().filter(|b| b.has_signal).count()
    }
}

/// Find a remote by id in a freshly fetched list.
pub fn find_remote(remotes: &[Remote], remote_id: RemoteId) -> Option<&Remote> {
    remotes.iter().find(|r| r.id == remote_id)
}

/// Validate a user-supplied name: trimmed and non-empty.
///
/// Returns the trimmed name, or `None` when nothing usable remains. Callers
/// must reject `None` before issuing any network call.
pub fn normalized_name(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Strip control characters from a user-supplied name before embedding it in
/// terminal output. A hostile name must not be able to move the cursor or
/// otherwise corrupt the display.
pub fn sanitize_label(input: &str) -> String {
    input.chars().filter(|c| !c.is_control()).collect()
}
