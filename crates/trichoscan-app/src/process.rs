//! Message processing: runs the TEA update loop and dispatches actions

use tokio::sync::mpsc;

use crate::actions::{handle_action, ScanTaskSet};
use crate::handler;
use crate::message::Message;
use crate::state::AppState;
use trichoscan_vision::SharedAnalysisClient;

/// Process a message through the TEA update function, following any chain
/// of follow-up messages and dispatching every resulting action.
pub fn process_message(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    scan_tasks: &ScanTaskSet,
    client: &SharedAnalysisClient,
) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), scan_tasks, client);
        }

        // Continue with follow-up message
        msg = result.message;
    }
}
