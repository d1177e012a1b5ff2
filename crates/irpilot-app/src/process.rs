//! Message processing - runs the TEA update cycle and dispatches actions

use tokio::sync::mpsc;

use irpilot_api::DeviceClient;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function, dispatching any
/// resulting action and chaining follow-up messages until quiescent.
pub fn process_message(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    client: &DeviceClient,
) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, client.clone(), msg_tx.clone());
        }

        // Continue with follow-up message
        msg = result.message;
    }
}
