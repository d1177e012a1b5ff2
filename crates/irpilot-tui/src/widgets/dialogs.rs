//! Modal dialogs: name input, delete confirmation, recording.
//!
//! Rendered over a dimmed backdrop into a centered box. The single typed
//! dialog slot in `AppState` decides which variant shows.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Widget};

use irpilot_app::{AppState, CapturePhase, Dialog};
use irpilot_core::{find_remote, sanitize_label};

use crate::theme::{palette, IconSet};

use super::modal_overlay::{centered_rect, dim_background};

pub struct DialogOverlay<'a> {
    state: &'a AppState,
    dialog: &'a Dialog,
}

impl<'a> DialogOverlay<'a> {
    pub fn new(state: &'a AppState, dialog: &'a Dialog) -> Self {
        Self { state, dialog }
    }

    fn remote_name(&self, remote_id: u32) -> String {
        find_remote(&self.state.remotes, remote_id)
            .map(|r| sanitize_label(&r.name))
            .unwrap_or_else(|| "this remote".to_string())
    }

    fn button_name(&self, button_id: u32) -> String {
        self.state
            .current_remote
            .as_ref()
            .and_then(|r| r.button(button_id))
            .map(|b| sanitize_label(&b.name))
            .unwrap_or_else(|| "this button".to_string())
    }
}

impl Widget for DialogOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        dim_background(buf, area);

        match self.dialog {
            Dialog::AddRemote { input } => {
                input_dialog(self.dialog.title(), "Remote name", &input.value, area, buf);
            }
            Dialog::AddButton { input, .. } => {
                input_dialog(self.dialog.title(), "Button name", &input.value, area, buf);
            }
            Dialog::EditButton { input, .. } => {
                input_dialog(self.dialog.title(), "Button name", &input.value, area, buf);
            }
            Dialog::ConfirmDeleteRemote { remote_id } => {
                let name = self.remote_name(*remote_id);
                confirm_dialog(
                    self.dialog.title(),
                    format!("Delete \"{name}\" and all its buttons?"),
                    area,
                    buf,
                );
            }
            Dialog::ConfirmDeleteButton { button_id, .. } => {
                let name = self.button_name(*button_id);
                confirm_dialog(
                    self.dialog.title(),
                    format!("Delete \"{name}\"?"),
                    area,
                    buf,
                );
            }
            Dialog::Recording { .. } => {
                let ticks = match &self.state.capture {
                    CapturePhase::Polling(session) => session.ticks,
                    _ => 0,
                };
                let icons = IconSet::new(self.state.settings.ui.unicode_symbols);
                recording_dialog(ticks, icons, area, buf);
            }
        }
    }
}

fn dialog_block(title: &str) -> Block<'_> {
    Block::bordered()
        .title(format!(" {title} "))
        .border_style(Style::default().fg(palette::BORDER_ACTIVE))
        .style(Style::default().bg(palette::POPUP_BG).fg(palette::TEXT_PRIMARY))
}

fn input_dialog(title: &str, label: &str, value: &str, area: Rect, buf: &mut Buffer) {
    let rect = centered_rect(44, 6, area);
    Clear.render(rect, buf);

    let lines = vec![
        Line::from(Span::styled(
            label,
            Style::default().fg(palette::TEXT_SECONDARY),
        )),
        Line::from(vec![
            Span::styled(
                sanitize_label(value),
                Style::default()
                    .fg(palette::TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("█", Style::default().fg(palette::ACCENT)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Enter save · Esc cancel",
            Style::default().fg(palette::TEXT_MUTED),
        )),
    ];
    Paragraph::new(lines)
        .block(dialog_block(title))
        .render(rect, buf);
}

fn confirm_dialog(title: &str, message: String, area: Rect, buf: &mut Buffer) {
    let rect = centered_rect(48, 6, area);
    Clear.render(rect, buf);

    let lines = vec![
        Line::from(message),
        Line::from(""),
        Line::from(Span::styled(
            "y/Enter confirm · n/Esc cancel",
            Style::default().fg(palette::TEXT_MUTED),
        )),
    ];
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(dialog_block(title))
        .render(rect, buf);
}

fn recording_dialog(ticks: u32, icons: IconSet, area: Rect, buf: &mut Buffer) {
    let rect = centered_rect(48, 9, area);
    Clear.render(rect, buf);

    // Alternate the badge each poll tick for a slow pulse
    let (pulse, pulse_color) = if ticks % 2 == 0 {
        (icons.recording, palette::STATUS_RED)
    } else {
        (icons.no_signal, palette::TEXT_MUTED)
    };

    let lines = vec![
        Line::from(Span::styled(
            format!("{pulse} Recording"),
            Style::default()
                .fg(pulse_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Point the remote at the receiver"),
        Line::from("and press the button to capture"),
        Line::from(""),
        Line::from(Span::styled(
            format!("Waiting for signal... {ticks}s"),
            Style::default().fg(palette::TEXT_SECONDARY),
        )),
        Line::from(Span::styled(
            "Esc cancel",
            Style::default().fg(palette::TEXT_MUTED),
        )),
    ];
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(dialog_block("Recording Signal"))
        .render(rect, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use irpilot_app::{NameInput, Settings};

    fn buffer_text(buf: &Buffer, area: Rect) -> String {
        let mut text = String::new();
        for y in area.y..area.y + area.height {
            for x in area.x..area.x + area.width {
                text.push_str(buf[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_input_dialog_shows_typed_value() {
        let mut state = AppState::new(Settings::default());
        state.open_dialog(Dialog::AddRemote {
            input: NameInput::with_value("TV Sala"),
        });
        let dialog = state.dialog.clone().unwrap();

        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        DialogOverlay::new(&state, &dialog).render(area, &mut buf);

        let text = buffer_text(&buf, area);
        assert!(text.contains("New Remote"));
        assert!(text.contains("TV Sala"));
    }

    #[test]
    fn test_confirm_dialog_names_the_remote() {
        let mut state = AppState::new(Settings::default());
        state.replace_remotes(vec![irpilot_core::Remote {
            id: 7,
            name: "Ceiling Fan".to_string(),
            buttons: vec![],
        }]);
        state.open_dialog(Dialog::ConfirmDeleteRemote { remote_id: 7 });
        let dialog = state.dialog.clone().unwrap();

        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        DialogOverlay::new(&state, &dialog).render(area, &mut buf);

        assert!(buffer_text(&buf, area).contains("Ceiling Fan"));
    }

    #[test]
    fn test_recording_dialog_shows_waiting_text() {
        let mut state = AppState::new(Settings::default());
        state.open_dialog(Dialog::Recording {
            remote_id: 1,
            button_id: 2,
        });
        let dialog = state.dialog.clone().unwrap();

        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        DialogOverlay::new(&state, &dialog).render(area, &mut buf);

        let text = buffer_text(&buf, area);
        assert!(text.contains("Waiting for signal"));
        assert!(text.contains("press the button"));
    }
}
