//! Main update function - handles state transitions (TEA pattern)
//!
//! Every mutation funnels through here: dialogs validate before any network
//! action is produced, mutation successes trigger a wholesale list refresh,
//! and capture lifecycle transitions own their poll-task cleanup.

use tracing::debug;

use irpilot_core::{find_remote, normalized_name};

use crate::dialog::{Dialog, NameInput};
use crate::message::{Message, RefreshReason};
use crate::state::{AppState, Screen};

use super::{keys::handle_key, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            state.notifications.tick();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        Message::GoHome => {
            state.go_home();
            UpdateResult::action(UpdateAction::LoadRemotes {
                reason: RefreshReason::Home,
            })
        }

        Message::ViewSelectedRemote => {
            if let Some(remote) = state.selected_remote().cloned() {
                state.view_remote(remote);
            }
            UpdateResult::none()
        }

        Message::EditSelectedRemote => {
            if let Some(remote) = state.selected_remote().cloned() {
                state.edit_remote(remote);
            }
            UpdateResult::none()
        }

        Message::EditCurrentRemote => {
            if state.screen == Screen::ViewRemote {
                state.screen = Screen::EditRemote;
                state.button_selected = 0;
            }
            UpdateResult::none()
        }

        Message::ViewCurrentRemote => {
            if state.screen == Screen::EditRemote {
                state.screen = Screen::ViewRemote;
                state.button_selected = 0;
            }
            UpdateResult::none()
        }

        Message::SelectionUp => {
            state.selection_up();
            UpdateResult::none()
        }

        Message::SelectionDown => {
            state.selection_down();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Dialogs
        // ─────────────────────────────────────────────────────────
        Message::OpenAddRemoteDialog => {
            state.open_dialog(Dialog::AddRemote {
                input: NameInput::default(),
            });
            UpdateResult::none()
        }

        Message::OpenAddButtonDialog => {
            if let Some(remote) = &state.current_remote {
                state.open_dialog(Dialog::AddButton {
                    remote_id: remote.id,
                    input: NameInput::default(),
                });
            }
            UpdateResult::none()
        }

        Message::OpenEditButtonDialog => {
            let target = state.current_remote.as_ref().and_then(|remote| {
                state
                    .selected_button()
                    .map(|b| (remote.id, b.id, b.name.clone()))
            });
            if let Some((remote_id, button_id, name)) = target {
                state.open_dialog(Dialog::EditButton {
                    remote_id,
                    button_id,
                    input: NameInput::with_value(name),
                });
            }
            UpdateResult::none()
        }

        Message::OpenDeleteRemoteDialog => {
            if let Some(remote) = state.selected_remote() {
                let remote_id = remote.id;
                state.open_dialog(Dialog::ConfirmDeleteRemote { remote_id });
            }
            UpdateResult::none()
        }

        Message::OpenDeleteButtonDialog => {
            let target = state.current_remote.as_ref().and_then(|remote| {
                state.selected_button().map(|b| (remote.id, b.id))
            });
            if let Some((remote_id, button_id)) = target {
                state.open_dialog(Dialog::ConfirmDeleteButton {
                    remote_id,
                    button_id,
                });
            }
            UpdateResult::none()
        }

        Message::DialogInput(c) => {
            if let Some(input) = state.dialog.as_mut().and_then(|d| d.input_mut()) {
                input.insert(c);
            }
            UpdateResult::none()
        }

        Message::DialogBackspace => {
            if let Some(input) = state.dialog.as_mut().and_then(|d| d.input_mut()) {
                input.backspace();
            }
            UpdateResult::none()
        }

        Message::DialogSubmit => handle_dialog_submit(state),

        Message::DialogCancel => {
            if state.dialog.as_ref().is_some_and(Dialog::is_recording) {
                return cancel_capture(state);
            }
            state.close_dialog();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Device actions
        // ─────────────────────────────────────────────────────────
        Message::SendSelectedSignal => {
            let target = state.current_remote.as_ref().and_then(|remote| {
                state
                    .selected_button()
                    .map(|b| (remote.id, b.id, b.has_signal))
            });
            match target {
                Some((remote_id, button_id, true)) => {
                    UpdateResult::action(UpdateAction::SendSignal {
                        remote_id,
                        button_id,
                    })
                }
                Some((_, _, false)) => {
                    state
                        .notifications
                        .warning("No signal", "This button has no captured signal yet");
                    UpdateResult::none()
                }
                None => UpdateResult::none(),
            }
        }

        Message::StartCaptureForSelected => {
            let target = state.current_remote.as_ref().and_then(|remote| {
                state.selected_button().map(|b| (remote.id, b.id))
            });
            if let Some((remote_id, button_id)) = target {
                if state.begin_capture(remote_id, button_id) {
                    return UpdateResult::action(UpdateAction::StartCapture {
                        remote_id,
                        button_id,
                    });
                }
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // API results
        // ─────────────────────────────────────────────────────────
        Message::RemotesLoaded { remotes, reason } => {
            state.replace_remotes(remotes);
            match reason {
                RefreshReason::Home => {
                    state.home_loading = false;
                }
                RefreshReason::ReselectEdit { remote_id } => {
                    match find_remote(&state.remotes, remote_id).cloned() {
                        Some(remote) => {
                            let selected = state.button_selected;
                            state.edit_remote(remote);
                            // Keep the cursor near where the user was working
                            state.button_selected = selected.min(
                                state
                                    .current_remote
                                    .as_ref()
                                    .map(|r| r.buttons.len().saturating_sub(1))
                                    .unwrap_or(0),
                            );
                        }
                        None => {
                            state
                                .notifications
                                .warning("Remote removed", "This remote no longer exists");
                            state.go_home();
                            state.home_loading = false;
                        }
                    }
                }
            }
            UpdateResult::none()
        }

        Message::RemoteAdded => {
            state.notifications.success("Success", "Remote added");
            state.close_dialog();
            UpdateResult::action(UpdateAction::LoadRemotes {
                reason: RefreshReason::Home,
            })
        }

        Message::RemoteDeleted => {
            state.notifications.success("Success", "Remote deleted");
            UpdateResult::action(UpdateAction::LoadRemotes {
                reason: RefreshReason::Home,
            })
        }

        Message::ButtonAdded { remote_id } => {
            state.notifications.success("Success", "Button added");
            state.close_dialog();
            UpdateResult::action(UpdateAction::LoadRemotes {
                reason: RefreshReason::ReselectEdit { remote_id },
            })
        }

        Message::ButtonEdited { remote_id } => {
            state.notifications.success("Success", "Button updated");
            state.close_dialog();
            UpdateResult::action(UpdateAction::LoadRemotes {
                reason: RefreshReason::ReselectEdit { remote_id },
            })
        }

        Message::ButtonDeleted { remote_id } => {
            state.notifications.success("Success", "Button deleted");
            UpdateResult::action(UpdateAction::LoadRemotes {
                reason: RefreshReason::ReselectEdit { remote_id },
            })
        }

        Message::SignalSent => {
            state.notifications.success("Sent", "IR signal transmitted");
            UpdateResult::none()
        }

        Message::ApiFailed { title, message } => {
            state.notifications.error(title, message);
            // The operation did not happen; whatever was pending on it is
            // unwound and prior state stays intact.
            state.reset_capture_start();
            state.home_loading = false;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Capture lifecycle
        // ─────────────────────────────────────────────────────────
        Message::CaptureStarted {
            remote_id,
            button_id,
        } => {
            let Some((generation, shutdown_rx)) = state.activate_capture(remote_id, button_id)
            else {
                debug!("Discarding stale capture acceptance for remote {remote_id}");
                return UpdateResult::none();
            };
            state.open_dialog(Dialog::Recording {
                remote_id,
                button_id,
            });
            let poll_interval_ms = state.settings.device.poll_interval_ms;
            UpdateResult::action(UpdateAction::SpawnCapturePoll {
                remote_id,
                button_id,
                generation,
                poll_interval_ms,
                shutdown_rx,
            })
        }

        Message::CapturePollTick {
            generation,
            has_signal,
        } => {
            let max_ticks = state.settings.device.max_poll_ticks;
            let ticks = match state.polling_session_mut(generation) {
                Some(session) => {
                    session.ticks += 1;
                    session.ticks
                }
                // Stale tick from an already stopped session
                None => return UpdateResult::none(),
            };

            if has_signal {
                let Some(remote_id) = state.finish_capture() else {
                    return UpdateResult::none();
                };
                state.close_dialog();
                state
                    .notifications
                    .success("Recorded", "IR signal captured");
                UpdateResult::action(UpdateAction::FinishCapture { remote_id })
            } else if max_ticks > 0 && ticks >= max_ticks {
                let Some(remote_id) = state.finish_capture() else {
                    return UpdateResult::none();
                };
                state.close_dialog();
                state
                    .notifications
                    .error("Capture failed", "No signal was received in time");
                UpdateResult::action(UpdateAction::FinishCapture { remote_id })
            } else {
                UpdateResult::none()
            }
        }
    }
}

/// Validate and act on the open dialog's submit.
///
/// Name dialogs stay open on validation failure (and on API failure, which
/// arrives later as `ApiFailed`); they close on the success message.
/// Confirm dialogs close immediately.
fn handle_dialog_submit(state: &mut AppState) -> UpdateResult {
    let Some(dialog) = state.dialog.clone() else {
        return UpdateResult::none();
    };

    match dialog {
        Dialog::AddRemote { input } => match normalized_name(&input.value) {
            Some(name) => UpdateResult::action(UpdateAction::AddRemote { name }),
            None => {
                state
                    .notifications
                    .warning("Attention", "Enter a name for the remote");
                UpdateResult::none()
            }
        },

        Dialog::AddButton { remote_id, input } => match normalized_name(&input.value) {
            Some(name) => UpdateResult::action(UpdateAction::AddButton { remote_id, name }),
            None => {
                state
                    .notifications
                    .warning("Attention", "Enter a name for the button");
                UpdateResult::none()
            }
        },

        Dialog::EditButton {
            remote_id,
            button_id,
            input,
        } => match normalized_name(&input.value) {
            Some(name) => UpdateResult::action(UpdateAction::EditButton {
                remote_id,
                button_id,
                name,
            }),
            None => {
                state
                    .notifications
                    .warning("Attention", "Enter a name for the button");
                UpdateResult::none()
            }
        },

        Dialog::ConfirmDeleteRemote { remote_id } => {
            state.close_dialog();
            UpdateResult::action(UpdateAction::DeleteRemote { remote_id })
        }

        Dialog::ConfirmDeleteButton {
            remote_id,
            button_id,
        } => {
            state.close_dialog();
            UpdateResult::action(UpdateAction::DeleteButton {
                remote_id,
                button_id,
            })
        }

        // Enter has no meaning while recording; Esc cancels.
        Dialog::Recording { .. } => UpdateResult::none(),
    }
}

/// User dismissed the Recording dialog: identical cleanup to completion,
/// minus the success toast.
fn cancel_capture(state: &mut AppState) -> UpdateResult {
    state.close_dialog();
    match state.finish_capture() {
        Some(remote_id) => UpdateResult::action(UpdateAction::FinishCapture { remote_id }),
        None => UpdateResult::none(),
    }
}
