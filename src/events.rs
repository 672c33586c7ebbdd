//! Backend event processing (fetch results and send outcomes).

use tracing::debug;

use crate::protocol::GuiEvent;
use crate::state::ClientState;

/// Apply a single backend event to the session state.
pub fn process_single_event(state: &mut ClientState, event: GuiEvent) {
    match event {
        GuiEvent::MessagesLoaded(messages) => {
            state.replace_messages(messages);
        }

        GuiEvent::FetchFailed(reason) => {
            // Already logged by the backend; the list stays as it was
            debug!(%reason, "keeping previous message list");
        }

        GuiEvent::SendSucceeded => {
            state.send_succeeded();
        }

        GuiEvent::SendFailed(error) => {
            state.send_failed(error);
        }
    }
}
