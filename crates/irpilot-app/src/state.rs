//! Application state (Model in TEA pattern)
//!
//! `AppState` owns the screen, the server-authoritative remote mirror, the
//! single dialog slot, the capture session, and the toast stack. All
//! mutation goes through `handler::update()` and the transition methods
//! here; nothing writes fields ad hoc from outside.

use tokio::sync::watch;

use irpilot_core::{Button, ButtonId, Remote, RemoteId};

use crate::config::Settings;
use crate::dialog::Dialog;
use crate::notify::Notifications;

/// Current screen. Exactly one is active at a time; `ViewRemote` and
/// `EditRemote` require `current_remote` to be present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    ViewRemote,
    EditRemote,
}

/// An active capture poll with its owned shutdown handle.
///
/// The `watch` sender is the cancellable timer handle: signalling it stops
/// the poll task. Every exit path from polling (complete, cancel, timeout,
/// quit) must go through [`CaptureSession::stop`].
#[derive(Debug)]
pub struct CaptureSession {
    pub remote_id: RemoteId,
    pub button_id: ButtonId,
    pub generation: u64,
    /// Poll ticks observed so far, for the max-duration bound.
    pub ticks: u32,
    shutdown_tx: watch::Sender<bool>,
}

impl CaptureSession {
    /// Signal the poll task to stop.
    pub fn stop(&self) {
        let _ = self.shutdown_tx.send(true);
    }
}

/// Capture synchronizer phase.
///
/// `Starting` covers the window between the user's request and the device
/// accepting it; it exists so a second start cannot be issued while the
/// first is in flight. Completed/cancelled/failed are transient and resolve
/// straight back to `Idle`.
#[derive(Debug, Default)]
pub enum CapturePhase {
    #[default]
    Idle,
    Starting {
        remote_id: RemoteId,
        button_id: ButtonId,
    },
    Polling(CaptureSession),
}

impl CapturePhase {
    pub fn is_idle(&self) -> bool {
        matches!(self, CapturePhase::Idle)
    }

    pub fn polling(&self) -> Option<&CaptureSession> {
        match self {
            CapturePhase::Polling(session) => Some(session),
            _ => None,
        }
    }
}

/// The application model. See module docs for mutation rules.
#[derive(Debug)]
pub struct AppState {
    pub settings: Settings,
    pub screen: Screen,

    /// Server-authoritative mirror, replaced wholesale on every fetch.
    pub remotes: Vec<Remote>,
    /// Snapshot of the remote shown on View/Edit screens.
    pub current_remote: Option<Remote>,
    /// Home shows a loading indicator instead of stale data until the
    /// entry fetch resolves.
    pub home_loading: bool,

    /// Selection index into `remotes` on the Home screen.
    pub home_selected: usize,
    /// Selection index into the current remote's buttons.
    pub button_selected: usize,

    /// The single foreground dialog slot.
    pub dialog: Option<Dialog>,
    pub capture: CapturePhase,
    pub notifications: Notifications,

    quitting: bool,
    /// Monotonic capture session counter; stale poll messages carry an
    /// older generation and are discarded.
    capture_generation: u64,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            screen: Screen::Home,
            remotes: Vec::new(),
            current_remote: None,
            home_loading: true,
            home_selected: 0,
            button_selected: 0,
            dialog: None,
            capture: CapturePhase::Idle,
            notifications: Notifications::new(),
            quitting: false,
            capture_generation: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.quitting
    }

    /// Quit, stopping any active capture poll on the way out.
    pub fn request_quit(&mut self) {
        if let CapturePhase::Polling(session) = &self.capture {
            session.stop();
        }
        self.capture = CapturePhase::Idle;
        self.quitting = true;
    }

    // ─────────────────────────────────────────────────────────
    // Navigation transitions
    // ─────────────────────────────────────────────────────────

    /// Switch to Home. The caller issues the list fetch; until it resolves
    /// the screen shows a loading indicator rather than stale data.
    pub fn go_home(&mut self) {
        self.screen = Screen::Home;
        self.current_remote = None;
        self.button_selected = 0;
        self.home_loading = true;
    }

    /// Show a remote's View screen from the given snapshot (no re-fetch).
    pub fn view_remote(&mut self, remote: Remote) {
        self.current_remote = Some(remote);
        self.button_selected = 0;
        self.screen = Screen::ViewRemote;
    }

    /// Show a remote's Edit screen from the given snapshot (no re-fetch).
    pub fn edit_remote(&mut self, remote: Remote) {
        self.current_remote = Some(remote);
        self.button_selected = 0;
        self.screen = Screen::EditRemote;
    }

    /// Replace the mirror wholesale from a fresh fetch.
    pub fn replace_remotes(&mut self, remotes: Vec<Remote>) {
        self.remotes = remotes;
        self.home_selected = self
            .home_selected
            .min(self.remotes.len().saturating_sub(1));
    }

    pub fn selected_remote(&self) -> Option<&Remote> {
        self.remotes.get(self.home_selected)
    }

    pub fn selected_button(&self) -> Option<&Button> {
        self.current_remote
            .as_ref()
            .and_then(|r| r.buttons.get(self.button_selected))
    }

    pub fn selection_up(&mut self) {
        match self.screen {
            Screen::Home => self.home_selected = self.home_selected.saturating_sub(1),
            Screen::ViewRemote | Screen::EditRemote => {
                self.button_selected = self.button_selected.saturating_sub(1);
            }
        }
    }

    pub fn selection_down(&mut self) {
        match self.screen {
            Screen::Home => {
                if self.home_selected + 1 < self.remotes.len() {
                    self.home_selected += 1;
                }
            }
            Screen::ViewRemote | Screen::EditRemote => {
                let count = self
                    .current_remote
                    .as_ref()
                    .map(|r| r.buttons.len())
                    .unwrap_or(0);
                if self.button_selected + 1 < count {
                    self.button_selected += 1;
                }
            }
        }
    }

    // ─────────────────────────────────────────────────────────
    // Dialog slot
    // ─────────────────────────────────────────────────────────

    /// Open a dialog; an already open one is replaced in place.
    pub fn open_dialog(&mut self, dialog: Dialog) {
        self.dialog = Some(dialog);
    }

    pub fn close_dialog(&mut self) {
        self.dialog = None;
    }

    // ─────────────────────────────────────────────────────────
    // Capture transitions
    // ─────────────────────────────────────────────────────────

    /// Idle -> Starting. Returns false when a session is already underway.
    pub fn begin_capture(&mut self, remote_id: RemoteId, button_id: ButtonId) -> bool {
        if !self.capture.is_idle() {
            return false;
        }
        self.capture = CapturePhase::Starting {
            remote_id,
            button_id,
        };
        true
    }

    /// Starting -> Polling, once the device accepted the start request.
    ///
    /// Creates the poll shutdown channel, stores the sender as the session's
    /// owned handle, and returns the receiver for the poll task together
    /// with the new session generation. Returns `None` when no matching
    /// start is pending (stale acceptance).
    pub fn activate_capture(
        &mut self,
        remote_id: RemoteId,
        button_id: ButtonId,
    ) -> Option<(u64, watch::Receiver<bool>)> {
        match self.capture {
            CapturePhase::Starting {
                remote_id: pending_remote,
                button_id: pending_button,
            } if pending_remote == remote_id && pending_button == button_id => {
                let (shutdown_tx, shutdown_rx) = watch::channel(false);
                self.capture_generation += 1;
                let generation = self.capture_generation;
                self.capture = CapturePhase::Polling(CaptureSession {
                    remote_id,
                    button_id,
                    generation,
                    ticks: 0,
                    shutdown_tx,
                });
                Some((generation, shutdown_rx))
            }
            _ => None,
        }
    }

    /// Abandon a pending start (the device rejected it).
    pub fn reset_capture_start(&mut self) {
        if matches!(self.capture, CapturePhase::Starting { .. }) {
            self.capture = CapturePhase::Idle;
        }
    }

    /// The active poll session, if `generation` still identifies it.
    pub fn polling_session_mut(&mut self, generation: u64) -> Option<&mut CaptureSession> {
        match &mut self.capture {
            CapturePhase::Polling(session) if session.generation == generation => Some(session),
            _ => None,
        }
    }

    /// Stop the active poll session and return to Idle.
    ///
    /// Returns the owning remote id so the caller can refresh and re-select
    /// it. Used by every exit path: completion, cancellation, and timeout.
    pub fn finish_capture(&mut self) -> Option<RemoteId> {
        match std::mem::take(&mut self.capture) {
            CapturePhase::Polling(session) => {
                session.stop();
                Some(session.remote_id)
            }
            phase @ CapturePhase::Starting { .. } => {
                self.capture = phase;
                None
            }
            CapturePhase::Idle => None,
        }
    }
}
