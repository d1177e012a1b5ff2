//! Tests for handler module

use super::*;
use crate::config::Settings;
use crate::dialog::Dialog;
use crate::input_key::InputKey;
use crate::notify::ToastKind;
use crate::state::{AppState, Screen};
use irpilot_core::{Button, Remote};
use tokio::sync::watch;

fn test_button(id: u32, name: &str, has_signal: bool) -> Button {
    Button {
        id,
        name: name.to_string(),
        has_signal,
    }
}

fn test_remote(id: u32, name: &str, buttons: Vec<Button>) -> Remote {
    Remote {
        id,
        name: name.to_string(),
        buttons,
    }
}

fn fresh_state() -> AppState {
    AppState::new(Settings::default())
}

/// State sitting on the Edit screen of remote 1, button 2 selected.
fn state_editing_remote() -> AppState {
    let mut state = fresh_state();
    let remote = test_remote(
        1,
        "TV",
        vec![
            test_button(1, "Power", true),
            test_button(2, "Volume Up", false),
        ],
    );
    state.replace_remotes(vec![remote.clone()]);
    state.edit_remote(remote);
    state.button_selected = 1;
    state
}

fn success_count(state: &AppState) -> usize {
    state
        .notifications
        .iter()
        .filter(|t| t.kind == ToastKind::Success)
        .count()
}

// ─────────────────────────────────────────────────────────────────
// Keys
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_q_quits_from_home() {
    let state = fresh_state();
    assert!(matches!(
        handle_key(&state, InputKey::Char('q')),
        Some(Message::Quit)
    ));
}

#[test]
fn test_ctrl_c_quits_even_in_dialog() {
    let mut state = fresh_state();
    state.open_dialog(Dialog::AddRemote {
        input: Default::default(),
    });
    assert!(matches!(
        handle_key(&state, InputKey::CharCtrl('c')),
        Some(Message::Quit)
    ));
}

#[test]
fn test_dialog_captures_character_keys() {
    let mut state = fresh_state();
    state.open_dialog(Dialog::AddRemote {
        input: Default::default(),
    });
    assert!(matches!(
        handle_key(&state, InputKey::Char('q')),
        Some(Message::DialogInput('q'))
    ));
    assert!(matches!(
        handle_key(&state, InputKey::Esc),
        Some(Message::DialogCancel)
    ));
}

#[test]
fn test_edit_screen_record_key() {
    let state = state_editing_remote();
    assert!(matches!(
        handle_key(&state, InputKey::Char('r')),
        Some(Message::StartCaptureForSelected)
    ));
}

#[test]
fn test_confirm_dialog_y_n_shortcuts() {
    let mut state = fresh_state();
    state.open_dialog(Dialog::ConfirmDeleteRemote { remote_id: 1 });
    assert!(matches!(
        handle_key(&state, InputKey::Char('y')),
        Some(Message::DialogSubmit)
    ));
    assert!(matches!(
        handle_key(&state, InputKey::Char('n')),
        Some(Message::DialogCancel)
    ));
}

// ─────────────────────────────────────────────────────────────────
// Quit
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_quit_message_sets_quit_flag() {
    let mut state = fresh_state();
    assert!(!state.should_quit());
    update(&mut state, Message::Quit);
    assert!(state.should_quit());
}

// ─────────────────────────────────────────────────────────────────
// Validation
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_empty_remote_name_is_rejected_without_network_call() {
    let mut state = fresh_state();
    update(&mut state, Message::OpenAddRemoteDialog);
    for c in "   ".chars() {
        update(&mut state, Message::DialogInput(c));
    }

    let result = update(&mut state, Message::DialogSubmit);

    assert!(result.action.is_none());
    let toast = state.notifications.latest().unwrap();
    assert_eq!(toast.kind, ToastKind::Warning);
    // Dialog stays open so the user can fix the name
    assert!(state.dialog.is_some());
}

#[test]
fn test_whitespace_button_name_is_rejected() {
    let mut state = state_editing_remote();
    update(&mut state, Message::OpenAddButtonDialog);
    update(&mut state, Message::DialogInput('\t'));

    let result = update(&mut state, Message::DialogSubmit);

    assert!(result.action.is_none());
    assert_eq!(state.notifications.latest().unwrap().kind, ToastKind::Warning);
}

#[test]
fn test_valid_name_is_trimmed_before_submit() {
    let mut state = fresh_state();
    update(&mut state, Message::OpenAddRemoteDialog);
    for c in "  TV Sala  ".chars() {
        update(&mut state, Message::DialogInput(c));
    }

    let result = update(&mut state, Message::DialogSubmit);

    match result.action {
        Some(UpdateAction::AddRemote { name }) => assert_eq!(name, "TV Sala"),
        other => panic!("expected AddRemote action, got {other:?}"),
    }
}

// ─────────────────────────────────────────────────────────────────
// Refresh and reselect
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_refresh_is_idempotent() {
    let mut state = fresh_state();
    let remotes = vec![test_remote(1, "TV", vec![test_button(1, "Power", true)])];

    update(
        &mut state,
        Message::RemotesLoaded {
            remotes: remotes.clone(),
            reason: RefreshReason::Home,
        },
    );
    let first = (state.remotes.clone(), state.screen, state.home_selected);

    update(
        &mut state,
        Message::RemotesLoaded {
            remotes,
            reason: RefreshReason::Home,
        },
    );
    let second = (state.remotes.clone(), state.screen, state.home_selected);

    assert_eq!(first, second);
}

#[test]
fn test_added_button_appears_without_signal() {
    let mut state = state_editing_remote();

    let result = update(&mut state, Message::ButtonAdded { remote_id: 1 });
    assert!(matches!(
        result.action,
        Some(UpdateAction::LoadRemotes {
            reason: RefreshReason::ReselectEdit { remote_id: 1 }
        })
    ));

    // The fresh list now contains the new button, hasSignal false
    let refreshed = test_remote(
        1,
        "TV",
        vec![
            test_button(1, "Power", true),
            test_button(2, "Volume Up", false),
            test_button(3, "Mute", false),
        ],
    );
    update(
        &mut state,
        Message::RemotesLoaded {
            remotes: vec![refreshed],
            reason: RefreshReason::ReselectEdit { remote_id: 1 },
        },
    );

    let current = state.current_remote.as_ref().unwrap();
    assert_eq!(current.buttons.len(), 3);
    assert!(!current.button(3).unwrap().has_signal);
    assert_eq!(state.screen, Screen::EditRemote);
}

#[test]
fn test_deleting_button_under_open_edit_screen() {
    let mut state = state_editing_remote();

    update(&mut state, Message::OpenDeleteButtonDialog);
    let result = update(&mut state, Message::DialogSubmit);
    assert!(matches!(
        result.action,
        Some(UpdateAction::DeleteButton {
            remote_id: 1,
            button_id: 2
        })
    ));

    update(&mut state, Message::ButtonDeleted { remote_id: 1 });
    update(
        &mut state,
        Message::RemotesLoaded {
            remotes: vec![test_remote(1, "TV", vec![test_button(1, "Power", true)])],
            reason: RefreshReason::ReselectEdit { remote_id: 1 },
        },
    );

    let current = state.current_remote.as_ref().unwrap();
    assert_eq!(current.buttons.len(), 1);
    // The surviving button is untouched
    assert_eq!(current.buttons[0].name, "Power");
    assert!(current.buttons[0].has_signal);
}

#[test]
fn test_current_remote_deleted_elsewhere_falls_back_home() {
    let mut state = state_editing_remote();

    update(
        &mut state,
        Message::RemotesLoaded {
            remotes: Vec::new(),
            reason: RefreshReason::ReselectEdit { remote_id: 1 },
        },
    );

    assert_eq!(state.screen, Screen::Home);
    assert!(state.current_remote.is_none());
    assert_eq!(state.notifications.latest().unwrap().kind, ToastKind::Warning);
}

// ─────────────────────────────────────────────────────────────────
// API failure
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_api_failure_surfaces_server_message_and_mutates_nothing() {
    let mut state = state_editing_remote();
    let remotes_before = state.remotes.clone();
    let screen_before = state.screen;

    let result = update(
        &mut state,
        Message::ApiFailed {
            title: "Error".to_string(),
            message: "not found".to_string(),
        },
    );

    assert!(result.action.is_none());
    let toast = state.notifications.latest().unwrap();
    assert_eq!(toast.kind, ToastKind::Error);
    assert_eq!(toast.message, "not found");
    assert_eq!(state.remotes, remotes_before);
    assert_eq!(state.screen, screen_before);
}

// ─────────────────────────────────────────────────────────────────
// Capture synchronizer
// ─────────────────────────────────────────────────────────────────

/// Drive the state through Idle -> Starting -> Polling and return the poll
/// handle the runner would have received.
fn start_polling(state: &mut AppState) -> (u64, watch::Receiver<bool>) {
    let result = update(state, Message::StartCaptureForSelected);
    assert!(matches!(
        result.action,
        Some(UpdateAction::StartCapture {
            remote_id: 1,
            button_id: 2
        })
    ));

    let result = update(
        state,
        Message::CaptureStarted {
            remote_id: 1,
            button_id: 2,
        },
    );
    assert!(state.dialog.as_ref().is_some_and(Dialog::is_recording));
    match result.action {
        Some(UpdateAction::SpawnCapturePoll {
            generation,
            shutdown_rx,
            poll_interval_ms,
            ..
        }) => {
            assert_eq!(poll_interval_ms, state.settings.device.poll_interval_ms);
            (generation, shutdown_rx)
        }
        other => panic!("expected SpawnCapturePoll action, got {other:?}"),
    }
}

#[test]
fn test_capture_completes_on_third_tick() {
    let mut state = state_editing_remote();
    let (generation, shutdown_rx) = start_polling(&mut state);

    for _ in 0..2 {
        let result = update(
            &mut state,
            Message::CapturePollTick {
                generation,
                has_signal: false,
            },
        );
        assert!(result.action.is_none());
        assert!(state.dialog.is_some());
        assert_eq!(success_count(&state), 0);
    }

    let result = update(
        &mut state,
        Message::CapturePollTick {
            generation,
            has_signal: true,
        },
    );

    // Exactly one stop-and-reselect, one success toast, dialog closed,
    // poll handle signalled.
    assert!(matches!(
        result.action,
        Some(UpdateAction::FinishCapture { remote_id: 1 })
    ));
    assert_eq!(success_count(&state), 1);
    assert!(state.dialog.is_none());
    assert!(*shutdown_rx.borrow());
    assert!(state.capture.is_idle());
}

#[test]
fn test_ticks_after_completion_are_ignored() {
    let mut state = state_editing_remote();
    let (generation, _shutdown_rx) = start_polling(&mut state);

    update(
        &mut state,
        Message::CapturePollTick {
            generation,
            has_signal: true,
        },
    );
    let result = update(
        &mut state,
        Message::CapturePollTick {
            generation,
            has_signal: true,
        },
    );

    assert!(result.action.is_none());
    assert_eq!(success_count(&state), 1);
}

#[test]
fn test_cancel_stops_poll_without_success_toast() {
    let mut state = state_editing_remote();
    let (_generation, shutdown_rx) = start_polling(&mut state);

    let result = update(&mut state, Message::DialogCancel);

    assert!(matches!(
        result.action,
        Some(UpdateAction::FinishCapture { remote_id: 1 })
    ));
    assert!(*shutdown_rx.borrow());
    assert!(state.dialog.is_none());
    assert!(state.capture.is_idle());
    assert_eq!(success_count(&state), 0);
}

#[test]
fn test_capture_times_out_after_max_ticks() {
    let mut state = state_editing_remote();
    state.settings.device.max_poll_ticks = 3;
    let (generation, shutdown_rx) = start_polling(&mut state);

    for _ in 0..2 {
        let result = update(
            &mut state,
            Message::CapturePollTick {
                generation,
                has_signal: false,
            },
        );
        assert!(result.action.is_none());
    }

    let result = update(
        &mut state,
        Message::CapturePollTick {
            generation,
            has_signal: false,
        },
    );

    assert!(matches!(
        result.action,
        Some(UpdateAction::FinishCapture { remote_id: 1 })
    ));
    assert!(*shutdown_rx.borrow());
    assert!(state.dialog.is_none());
    assert_eq!(success_count(&state), 0);
    assert_eq!(state.notifications.latest().unwrap().kind, ToastKind::Error);
}

#[test]
fn test_second_capture_cannot_start_while_one_is_active() {
    let mut state = state_editing_remote();
    let result = update(&mut state, Message::StartCaptureForSelected);
    assert!(result.action.is_some());

    let result = update(&mut state, Message::StartCaptureForSelected);
    assert!(result.action.is_none());
}

#[test]
fn test_start_failure_returns_to_idle() {
    let mut state = state_editing_remote();
    update(&mut state, Message::StartCaptureForSelected);

    update(
        &mut state,
        Message::ApiFailed {
            title: "Connection error".to_string(),
            message: "Could not connect to the device".to_string(),
        },
    );

    assert!(state.capture.is_idle());
    assert!(state.dialog.is_none());
    // A new attempt is possible
    let result = update(&mut state, Message::StartCaptureForSelected);
    assert!(result.action.is_some());
}

#[test]
fn test_stale_generation_tick_is_discarded() {
    let mut state = state_editing_remote();
    let (old_generation, _old_rx) = start_polling(&mut state);
    update(&mut state, Message::DialogCancel);

    // Second session
    let (new_generation, _new_rx) = start_polling(&mut state);
    assert_ne!(old_generation, new_generation);

    let result = update(
        &mut state,
        Message::CapturePollTick {
            generation: old_generation,
            has_signal: true,
        },
    );

    assert!(result.action.is_none());
    assert_eq!(success_count(&state), 0);
    assert!(state.polling_session_mut(new_generation).is_some());
}

#[test]
fn test_quit_during_polling_stops_the_poll() {
    let mut state = state_editing_remote();
    let (_generation, shutdown_rx) = start_polling(&mut state);

    update(&mut state, Message::Quit);

    assert!(state.should_quit());
    assert!(*shutdown_rx.borrow());
}

// ─────────────────────────────────────────────────────────────────
// Navigation
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_go_home_triggers_fresh_fetch() {
    let mut state = state_editing_remote();

    let result = update(&mut state, Message::GoHome);

    assert_eq!(state.screen, Screen::Home);
    assert!(state.home_loading);
    assert!(state.current_remote.is_none());
    assert!(matches!(
        result.action,
        Some(UpdateAction::LoadRemotes {
            reason: RefreshReason::Home
        })
    ));
}

#[test]
fn test_view_renders_from_snapshot_without_fetch() {
    let mut state = fresh_state();
    state.replace_remotes(vec![test_remote(1, "TV", vec![])]);

    let result = update(&mut state, Message::ViewSelectedRemote);

    assert_eq!(state.screen, Screen::ViewRemote);
    assert!(state.current_remote.is_some());
    assert!(result.action.is_none());
}

#[test]
fn test_send_signal_requires_captured_signal() {
    let mut state = state_editing_remote();
    state.screen = Screen::ViewRemote;

    // Selected button 2 has no signal
    let result = update(&mut state, Message::SendSelectedSignal);
    assert!(result.action.is_none());
    assert_eq!(state.notifications.latest().unwrap().kind, ToastKind::Warning);

    state.button_selected = 0; // Power, has a signal
    let result = update(&mut state, Message::SendSelectedSignal);
    assert!(matches!(
        result.action,
        Some(UpdateAction::SendSignal {
            remote_id: 1,
            button_id: 1
        })
    ));
}
