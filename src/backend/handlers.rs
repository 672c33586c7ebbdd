//! Handlers for backend actions, plus the fetch and send tasks they spawn.

use std::ops::ControlFlow;
use std::sync::Arc;

use crossbeam_channel::Sender;
use tracing::{debug, warn};

use crate::error::ChatError;
use crate::message::OutgoingMessage;
use crate::protocol::{BackendAction, GuiEvent};
use crate::store::ChatStore;

/// Handle a backend action from the GUI
pub fn handle_backend_action(
    action: BackendAction,
    store: &Arc<dyn ChatStore>,
    event_tx: &Sender<GuiEvent>,
) -> ControlFlow<()> {
    match action {
        BackendAction::Send(message) => {
            spawn_send(store.clone(), event_tx.clone(), message);
        }
        BackendAction::Shutdown => {
            debug!("backend shutdown requested");
            return ControlFlow::Break(());
        }
    }
    ControlFlow::Continue(())
}

/// Fetch the message list on its own task so a slow poll never blocks a send.
pub fn spawn_fetch(store: Arc<dyn ChatStore>, event_tx: Sender<GuiEvent>) {
    tokio::spawn(async move {
        fetch_messages(store.as_ref(), &event_tx).await;
    });
}

async fn fetch_messages(store: &dyn ChatStore, event_tx: &Sender<GuiEvent>) {
    match store.list_messages().await {
        Ok(messages) => {
            let _ = event_tx.send(GuiEvent::MessagesLoaded(messages));
        }
        Err(e) => {
            // Polls fail silently; the next tick tries again
            warn!(error = %e, "failed to fetch messages");
            let _ = event_tx.send(GuiEvent::FetchFailed(e.to_string()));
        }
    }
}

/// Post a message, report the outcome, and refresh the list on success.
pub fn spawn_send(store: Arc<dyn ChatStore>, event_tx: Sender<GuiEvent>, message: OutgoingMessage) {
    tokio::spawn(async move {
        let completion = SendCompletion::new(event_tx.clone());
        match store.send_message(&message).await {
            Ok(()) => {
                completion.finish(GuiEvent::SendSucceeded);
                fetch_messages(store.as_ref(), &event_tx).await;
            }
            Err(e) => {
                warn!(error = %e, "failed to send message");
                completion.finish(GuiEvent::SendFailed(ChatError::from(&e)));
            }
        }
    });
}

/// Guarantees the UI hears back about every send.
///
/// If the task is dropped before finishing (runtime shutdown, panic in the
/// store) a `SendFailed` is reported so the send control is re-enabled.
struct SendCompletion {
    event_tx: Sender<GuiEvent>,
    finished: bool,
}

impl SendCompletion {
    fn new(event_tx: Sender<GuiEvent>) -> Self {
        Self {
            event_tx,
            finished: false,
        }
    }

    fn finish(mut self, event: GuiEvent) {
        self.finished = true;
        let _ = self.event_tx.send(event);
    }
}

impl Drop for SendCompletion {
    fn drop(&mut self) {
        if !self.finished {
            let _ = self.event_tx.send(GuiEvent::SendFailed(ChatError::SendFailed));
        }
    }
}
