//! Edit screen: button management for one remote.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use irpilot_app::AppState;
use irpilot_core::sanitize_label;

use crate::theme::{palette, IconSet};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let Some(remote) = &state.current_remote else {
        return;
    };
    let icons = IconSet::new(state.settings.ui.unicode_symbols);

    if remote.buttons.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from("No buttons yet"),
            Line::from(Span::styled(
                "Press a to add one, then r to record its signal",
                Style::default().fg(palette::TEXT_MUTED),
            )),
        ])
        .alignment(Alignment::Center)
        .block(bordered_block());
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = remote
        .buttons
        .iter()
        .map(|button| {
            let badge = if button.has_signal {
                Span::styled(icons.signal, Style::default().fg(palette::STATUS_GREEN))
            } else {
                Span::styled(icons.no_signal, Style::default().fg(palette::TEXT_MUTED))
            };
            let hint = if button.has_signal {
                Span::styled("  r re-record", Style::default().fg(palette::TEXT_MUTED))
            } else {
                Span::styled("  r record", Style::default().fg(palette::STATUS_YELLOW))
            };
            ListItem::new(Line::from(vec![
                badge,
                Span::raw(" "),
                Span::styled(
                    sanitize_label(&button.name),
                    Style::default().fg(palette::TEXT_PRIMARY),
                ),
                hint,
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

    let mut list_state = ListState::default().with_selected(Some(state.button_selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn bordered_block() -> Block<'static> {
    Block::bordered()
        .title(" Buttons ")
        .border_style(Style::default().fg(palette::BORDER_ACTIVE))
}
