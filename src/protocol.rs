use crate::error::ChatError;
use crate::message::{Message, OutgoingMessage};

/// Actions sent from the UI to the Backend
#[derive(Debug, Clone)]
pub enum BackendAction {
    /// Post a validated message to the store
    Send(OutgoingMessage),
    /// Stop the poll timer and exit the backend thread
    Shutdown,
}

/// Events sent from the Backend to the UI
#[derive(Debug, Clone)]
pub enum GuiEvent {
    /// A fetch succeeded; the list replaces the current one verbatim
    MessagesLoaded(Vec<Message>),
    /// A fetch failed. Diagnostic only, never shown to the user
    FetchFailed(String),
    /// The store accepted a send
    SendSucceeded,
    /// A send did not go through
    SendFailed(ChatError),
}
