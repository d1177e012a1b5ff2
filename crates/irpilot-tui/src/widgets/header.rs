//! Top header bar: application name, screen title, device address.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use irpilot_app::{AppState, Screen};
use irpilot_core::sanitize_label;

use crate::theme::palette;

pub struct Header<'a> {
    state: &'a AppState,
}

impl<'a> Header<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn screen_title(&self) -> String {
        let remote_name = self
            .state
            .current_remote
            .as_ref()
            .map(|r| sanitize_label(&r.name))
            .unwrap_or_default();
        match self.state.screen {
            Screen::Home => "Remotes".to_string(),
            Screen::ViewRemote => remote_name,
            Screen::EditRemote => format!("Edit: {remote_name}"),
        }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(" irpilot ")
            .border_style(Style::default().fg(palette::BORDER_DIM));
        let inner = block.inner(area);
        block.render(area, buf);

        let line = Line::from(vec![
            Span::styled(
                self.screen_title(),
                Style::default()
                    .fg(palette::TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                self.state.settings.device.url.clone(),
                Style::default().fg(palette::TEXT_MUTED),
            ),
        ]);
        Paragraph::new(line).render(inner, buf);
    }
}
