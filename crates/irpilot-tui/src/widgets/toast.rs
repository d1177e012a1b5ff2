//! Toast stack rendered over the top-right corner.
//!
//! Toasts stack downward, newest last; entries past their display window
//! render dimmed during the exit phase until the tick removes them.

use std::time::Instant;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Widget};

use irpilot_app::{Notifications, Toast, ToastKind};
use irpilot_core::sanitize_label;

use crate::theme::palette;

const TOAST_WIDTH: u16 = 36;
const TOAST_HEIGHT: u16 = 4;

pub struct ToastStack<'a> {
    notifications: &'a Notifications,
    unicode: bool,
}

impl<'a> ToastStack<'a> {
    pub fn new(notifications: &'a Notifications, unicode: bool) -> Self {
        Self {
            notifications,
            unicode,
        }
    }

    fn icon(&self, kind: ToastKind) -> &'static str {
        match (kind, self.unicode) {
            (ToastKind::Success, true) => "✓",
            (ToastKind::Error, true) => "✗",
            (ToastKind::Warning, true) => "⚠",
            (ToastKind::Info, true) => "ℹ",
            (ToastKind::Success, false) => "+",
            (ToastKind::Error, false) => "x",
            (ToastKind::Warning, false) => "!",
            (ToastKind::Info, false) => "i",
        }
    }
}

fn kind_color(kind: ToastKind) -> Color {
    match kind {
        ToastKind::Success => palette::STATUS_GREEN,
        ToastKind::Error => palette::STATUS_RED,
        ToastKind::Warning => palette::STATUS_YELLOW,
        ToastKind::Info => palette::STATUS_BLUE,
    }
}

fn render_toast(toast: &Toast, icon: &'static str, exiting: bool, rect: Rect, buf: &mut Buffer) {
    let accent = if exiting {
        palette::TEXT_MUTED
    } else {
        kind_color(toast.kind)
    };
    let body = if exiting {
        palette::TEXT_MUTED
    } else {
        palette::TEXT_SECONDARY
    };

    Clear.render(rect, buf);
    let block = Block::bordered().border_style(Style::default().fg(accent));
    let lines = vec![
        Line::from(vec![
            Span::styled(icon, Style::default().fg(accent)),
            Span::raw(" "),
            Span::styled(
                sanitize_label(&toast.title),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            sanitize_label(&toast.message),
            Style::default().fg(body),
        )),
    ];
    Paragraph::new(lines).block(block).render(rect, buf);
}

impl Widget for ToastStack<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.notifications.is_empty() {
            return;
        }

        let now = Instant::now();
        let width = TOAST_WIDTH.min(area.width);
        let x = area.x + area.width.saturating_sub(width + 1);
        let mut y = area.y + 1;

        for toast in self.notifications.iter() {
            if y + TOAST_HEIGHT > area.y + area.height {
                // Out of vertical space; older toasts keep their slots
                break;
            }
            let rect = Rect::new(x, y, width, TOAST_HEIGHT);
            render_toast(toast, self.icon(toast.kind), toast.is_exiting(now), rect, buf);
            y += TOAST_HEIGHT;
        }
    }
}
