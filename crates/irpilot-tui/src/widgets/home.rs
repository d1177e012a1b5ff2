//! Home screen: the remote list.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use irpilot_app::AppState;
use irpilot_core::sanitize_label;

use crate::theme::palette;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    if state.home_loading {
        let loading = Paragraph::new("Loading remotes...")
            .style(Style::default().fg(palette::TEXT_SECONDARY))
            .alignment(Alignment::Center)
            .block(bordered_block());
        frame.render_widget(loading, area);
        return;
    }

    if state.remotes.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from("No remotes yet"),
            Line::from(""),
            Line::from(Span::styled(
                "Press a to add one",
                Style::default().fg(palette::TEXT_MUTED),
            )),
        ])
        .alignment(Alignment::Center)
        .block(bordered_block());
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = state
        .remotes
        .iter()
        .map(|remote| {
            let captured = remote.captured_count();
            let total = remote.buttons.len();
            ListItem::new(Line::from(vec![
                Span::styled(
                    sanitize_label(&remote.name),
                    Style::default().fg(palette::TEXT_PRIMARY),
                ),
                Span::styled(
                    format!("  {captured}/{total} captured"),
                    Style::default().fg(palette::TEXT_MUTED),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(bordered_block())
        .highlight_style(
            Style::default()
                .fg(palette::SELECTION_FG)
                .bg(palette::SELECTION_BG)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("› ");

    let mut list_state = ListState::default().with_selected(Some(state.home_selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn bordered_block() -> Block<'static> {
    Block::bordered()
        .title(" Remotes ")
        .border_style(Style::default().fg(palette::BORDER_DIM))
}
