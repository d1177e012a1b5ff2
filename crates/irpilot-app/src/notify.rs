//! Transient toast notifications.
//!
//! Toasts stack: pushing never evicts older entries, and there is no
//! deduplication. Each toast is visible for [`TOAST_DISPLAY`], then spends
//! [`TOAST_EXIT`] in a dimmed exit phase before removal. Expiry is driven by
//! the event-loop tick, not a per-toast timer, so there is nothing to cancel.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// How long a toast is fully visible.
pub const TOAST_DISPLAY: Duration = Duration::from_millis(4000);

/// Exit phase after the display window, rendered dimmed.
pub const TOAST_EXIT: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub title: String,
    pub message: String,
    pub created_at: Instant,
}

impl Toast {
    pub fn new(kind: ToastKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
            created_at: Instant::now(),
        }
    }

    /// Past the display window, in the dimmed exit phase.
    pub fn is_exiting(&self, now: Instant) -> bool {
        now.duration_since(self.created_at) >= TOAST_DISPLAY
    }

    /// Past display plus exit: remove on the next tick.
    pub fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.created_at) >= TOAST_DISPLAY + TOAST_EXIT
    }
}

/// The visible toast stack, oldest first.
#[derive(Debug, Default)]
pub struct Notifications {
    toasts: VecDeque<Toast>,
}

impl Notifications {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: ToastKind, title: impl Into<String>, message: impl Into<String>) {
        self.toasts.push_back(Toast::new(kind, title, message));
    }

    pub fn success(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.push(ToastKind::Success, title, message);
    }

    pub fn error(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.push(ToastKind::Error, title, message);
    }

    pub fn warning(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.push(ToastKind::Warning, title, message);
    }

    pub fn info(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.push(ToastKind::Info, title, message);
    }

    /// Drop expired toasts. Called from the event-loop tick.
    pub fn tick(&mut self) {
        let now = Instant::now();
        self.toasts.retain(|t| !t.is_expired(now));
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Most recent toast, if any.
    pub fn latest(&self) -> Option<&Toast> {
        self.toasts.back()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backdated(kind: ToastKind, age: Duration) -> Toast {
        Toast {
            kind,
            title: "t".to_string(),
            message: "m".to_string(),
            created_at: Instant::now() - age,
        }
    }

    #[test]
    fn test_push_stacks_without_eviction() {
        let mut notifications = Notifications::new();
        for i in 0..10 {
            notifications.success("Done", format!("step {i}"));
        }
        assert_eq!(notifications.len(), 10);
        assert_eq!(notifications.latest().unwrap().message, "step 9");
    }

    #[test]
    fn test_toast_lifecycle_phases() {
        let fresh = backdated(ToastKind::Info, Duration::ZERO);
        let exiting = backdated(ToastKind::Info, TOAST_DISPLAY + Duration::from_millis(100));
        let gone = backdated(ToastKind::Info, TOAST_DISPLAY + TOAST_EXIT);
        let now = Instant::now();

        assert!(!fresh.is_exiting(now));
        assert!(!fresh.is_expired(now));

        assert!(exiting.is_exiting(now));
        assert!(!exiting.is_expired(now));

        assert!(gone.is_expired(now));
    }

    #[test]
    fn test_tick_removes_only_expired() {
        let mut notifications = Notifications::new();
        notifications.toasts.push_back(backdated(
            ToastKind::Error,
            TOAST_DISPLAY + TOAST_EXIT + Duration::from_millis(10),
        ));
        notifications.toasts.push_back(backdated(ToastKind::Success, Duration::ZERO));

        notifications.tick();

        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications.latest().unwrap().kind, ToastKind::Success);
    }
}
