//! Main render/view function (View in TEA pattern)

use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use irpilot_app::{AppState, Screen};

use crate::theme::palette;
use crate::{layout, widgets};

/// Render the complete UI from the current state.
///
/// Pure mapping from state to the frame: the whole content region is
/// redrawn every call, dialog and toasts overlaid last.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Fill entire terminal with the background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);

    frame.render_widget(widgets::Header::new(state), areas.header);

    match state.screen {
        Screen::Home => widgets::home::render(frame, areas.body, state),
        Screen::ViewRemote => widgets::remote_view::render(frame, areas.body, state),
        Screen::EditRemote => widgets::remote_edit::render(frame, areas.body, state),
    }

    frame.render_widget(widgets::StatusBar::new(state), areas.status);

    // Foreground dialog over a dimmed backdrop
    if let Some(dialog) = &state.dialog {
        frame.render_widget(widgets::DialogOverlay::new(state, dialog), area);
    }

    // Toasts stack above everything
    frame.render_widget(
        widgets::ToastStack::new(&state.notifications, state.settings.ui.unicode_symbols),
        area,
    );
}
