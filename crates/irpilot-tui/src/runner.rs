//! Main TUI runner - entry point and event loop

use tokio::sync::mpsc;
use tracing::info;

use irpilot_api::DeviceClient;
use irpilot_app::{process_message, AppState, Message, Settings};
use irpilot_core::Result;

use super::{event, render, terminal};

/// Run the TUI application against the configured device.
pub async fn run(settings: Settings) -> Result<()> {
    // Validate the device URL before touching the terminal
    let base_url = settings.device_url()?;
    info!("Using device at {}", base_url);

    // Install panic hook for terminal restoration
    terminal::install_panic_hook();
    let mut term = ratatui::init();

    let client = DeviceClient::new(base_url);
    let mut state = AppState::new(settings);

    // Unified message channel for background task results
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    // Kick off the initial Home fetch
    process_message(&mut state, Message::GoHome, &msg_tx, &client);

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, &client);

    ratatui::restore();
    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    client: &DeviceClient,
) -> Result<()> {
    while !state.should_quit() {
        // Drain background task results (non-blocking)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx, client);
        }

        // Render
        terminal.draw(|frame| render::view(frame, state))?;

        // Handle terminal events (50ms timeout produces Tick)
        if let Some(message) = event::poll()? {
            process_message(state, message, &msg_tx, client);
        }
    }

    Ok(())
}
