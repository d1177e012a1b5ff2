//! Bottom status line with context-sensitive key hints.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Widget};

use irpilot_app::{AppState, Dialog, Screen};

use crate::theme::palette;

pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn hints(&self) -> &'static str {
        if let Some(dialog) = &self.state.dialog {
            return match dialog {
                Dialog::Recording { .. } => " Esc cancel recording",
                Dialog::ConfirmDeleteRemote { .. } | Dialog::ConfirmDeleteButton { .. } => {
                    " y/Enter confirm · n/Esc cancel"
                }
                _ => " Enter save · Esc cancel",
            };
        }
        match self.state.screen {
            Screen::Home => " ↑/↓ select · Enter use · e edit · a add · d delete · q quit",
            Screen::ViewRemote => " ↑/↓ select · Enter send · e edit · Esc back",
            Screen::EditRemote => " r record · a add · e rename · d delete · Esc back",
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Line::from(self.hints()))
            .style(Style::default().fg(palette::TEXT_MUTED))
            .render(area, buf);
    }
}
