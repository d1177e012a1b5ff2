//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Each action spawns one tokio task holding a clone of the device client;
//! results come back as [`Message`]s over the unified channel. Closed
//! channels mean the application is shutting down, so send failures are
//! silently dropped.

use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tracing::debug;

use irpilot_api::{ApiError, DeviceClient};
use irpilot_core::{find_remote, ButtonId, RemoteId};

use crate::handler::UpdateAction;
use crate::message::{Message, RefreshReason};

/// Execute an action by spawning a background task
pub fn handle_action(action: UpdateAction, client: DeviceClient, msg_tx: mpsc::Sender<Message>) {
    match action {
        UpdateAction::LoadRemotes { reason } => {
            tokio::spawn(async move {
                let msg = match client.list_remotes().await {
                    Ok(remotes) => Message::RemotesLoaded { remotes, reason },
                    Err(e) => failure(&e),
                };
                let _ = msg_tx.send(msg).await;
            });
        }

        UpdateAction::AddRemote { name } => {
            tokio::spawn(async move {
                let msg = match client.add_remote(&name).await {
                    Ok(()) => Message::RemoteAdded,
                    Err(e) => failure(&e),
                };
                let _ = msg_tx.send(msg).await;
            });
        }

        UpdateAction::DeleteRemote { remote_id } => {
            tokio::spawn(async move {
                let msg = match client.delete_remote(remote_id).await {
                    Ok(()) => Message::RemoteDeleted,
                    Err(e) => failure(&e),
                };
                let _ = msg_tx.send(msg).await;
            });
        }

        UpdateAction::AddButton { remote_id, name } => {
            tokio::spawn(async move {
                let msg = match client.add_button(remote_id, &name).await {
                    Ok(()) => Message::ButtonAdded { remote_id },
                    Err(e) => failure(&e),
                };
                let _ = msg_tx.send(msg).await;
            });
        }

        UpdateAction::EditButton {
            remote_id,
            button_id,
            name,
        } => {
            tokio::spawn(async move {
                let msg = match client.edit_button(remote_id, button_id, &name).await {
                    Ok(()) => Message::ButtonEdited { remote_id },
                    Err(e) => failure(&e),
                };
                let _ = msg_tx.send(msg).await;
            });
        }

        UpdateAction::DeleteButton {
            remote_id,
            button_id,
        } => {
            tokio::spawn(async move {
                let msg = match client.delete_button(remote_id, button_id).await {
                    Ok(()) => Message::ButtonDeleted { remote_id },
                    Err(e) => failure(&e),
                };
                let _ = msg_tx.send(msg).await;
            });
        }

        UpdateAction::SendSignal {
            remote_id,
            button_id,
        } => {
            tokio::spawn(async move {
                let msg = match client.send_signal(remote_id, button_id).await {
                    Ok(()) => Message::SignalSent,
                    Err(e) => failure(&e),
                };
                let _ = msg_tx.send(msg).await;
            });
        }

        UpdateAction::StartCapture {
            remote_id,
            button_id,
        } => {
            tokio::spawn(async move {
                let msg = match client.start_capture(remote_id, button_id).await {
                    Ok(()) => Message::CaptureStarted {
                        remote_id,
                        button_id,
                    },
                    Err(e) => failure(&e),
                };
                let _ = msg_tx.send(msg).await;
            });
        }

        UpdateAction::SpawnCapturePoll {
            remote_id,
            button_id,
            generation,
            poll_interval_ms,
            shutdown_rx,
        } => {
            spawn_capture_poll(
                client,
                msg_tx,
                remote_id,
                button_id,
                generation,
                poll_interval_ms,
                shutdown_rx,
            );
        }

        UpdateAction::FinishCapture { remote_id } => {
            tokio::spawn(async move {
                // Best-effort; the device tolerates a stop after the capture
                // already finished.
                if let Err(e) = client.stop_capture().await {
                    debug!("stop-capture failed (ignored): {e}");
                }
                let msg = match client.list_remotes().await {
                    Ok(remotes) => Message::RemotesLoaded {
                        remotes,
                        reason: RefreshReason::ReselectEdit { remote_id },
                    },
                    Err(e) => failure(&e),
                };
                let _ = msg_tx.send(msg).await;
            });
        }
    }
}

fn failure(error: &ApiError) -> Message {
    Message::ApiFailed {
        title: error.title().to_string(),
        message: error.user_message(),
    }
}

/// Spawn the capture poll task.
///
/// Every `poll_interval_ms` the task re-fetches the remote list and reports
/// whether the target button holds a signal. A missing remote or button is
/// reported as "no signal yet" rather than an error: the poll keeps going
/// until completion, cancellation, or the tick bound. Fetch errors are
/// logged and skipped; the next tick retries.
///
/// The task stops when the shutdown channel signals `true` (its sender is
/// owned by the `CaptureSession` in state) or when the message channel
/// closes.
#[allow(clippy::too_many_arguments)]
fn spawn_capture_poll(
    client: DeviceClient,
    msg_tx: mpsc::Sender<Message>,
    remote_id: RemoteId,
    button_id: ButtonId,
    generation: u64,
    poll_interval_ms: u64,
    mut shutdown_rx: watch::Receiver<bool>,
) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(poll_interval_ms.max(100)));
        // The first tick fires immediately; skip it so the dialog is visible
        // for at least one period before the first fetch.
        interval.tick().await;

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    let has_signal = match client.list_remotes().await {
                        Ok(remotes) => find_remote(&remotes, remote_id)
                            .and_then(|r| r.button(button_id))
                            .map(|b| b.has_signal)
                            .unwrap_or(false),
                        Err(e) => {
                            debug!("capture poll fetch failed (retrying): {e}");
                            continue;
                        }
                    };

                    if msg_tx
                        .send(Message::CapturePollTick { generation, has_signal })
                        .await
                        .is_err()
                    {
                        // Application shutting down.
                        break;
                    }
                }

                _ = shutdown_rx.changed() => {
                    if *shutdown_rx.borrow() {
                        debug!("capture poll for remote {remote_id} stopped");
                        break;
                    }
                }
            }
        }
    });
}
