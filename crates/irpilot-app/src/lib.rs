//! irpilot-app - Application state and orchestration for irpilot
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: a single [`AppState`] model, a [`Message`] enum, a pure
//! [`update()`] function, and [`UpdateAction`]s executed as background tokio
//! tasks by [`handle_action()`]. It also owns the typed dialog slot, the
//! toast queue, the capture synchronizer, and settings loading.

pub mod actions;
pub mod config;
pub mod dialog;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod notify;
pub mod process;
pub mod state;

// Re-export primary types
pub use actions::handle_action;
pub use config::{load_settings, load_settings_from, Settings};
pub use dialog::{Dialog, NameInput};
pub use handler::{update, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::{Message, RefreshReason};
pub use notify::{Notifications, Toast, ToastKind};
pub use process::process_message;
pub use state::{AppState, CapturePhase, CaptureSession, Screen};
