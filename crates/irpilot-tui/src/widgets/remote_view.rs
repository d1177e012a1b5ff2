//! View screen: the button pad of one remote. Enter replays the selected
//! button's signal; buttons without a capture render dimmed.

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
            Line::from("No buttons on this remote"),
            Line::from(Span::styled(
                "Press e to edit and add some",
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
            let (badge, name_style) = if button.has_signal {
                (
                    Span::styled(icons.signal, Style::default().fg(palette::STATUS_GREEN)),
                    Style::default().fg(palette::TEXT_PRIMARY),
                )
            } else {
                (
                    Span::styled(icons.no_signal, Style::default().fg(palette::TEXT_MUTED)),
                    Style::default().fg(palette::TEXT_MUTED),
                )
            };
            let mut spans = vec![
                badge,
                Span::raw(" "),
                Span::styled(sanitize_label(&button.name), name_style),
            ];
            if !button.has_signal {
                spans.push(Span::styled(
                    "  (no signal)",
                    Style::default().fg(palette::TEXT_MUTED),
                ));
            }
            ListItem::new(Line::from(spans))
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
