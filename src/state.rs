//! Core session state, separated from UI logic.
//!
//! `ClientState` holds everything that represents one chat session: the
//! form fields, the last fetched message list and the send status flags.
//! UI components receive it as a parameter rather than owning it.

use tracing::debug;

use crate::error::ChatError;
use crate::message::{self, Message, OutgoingMessage};
use crate::validation;

/// Local view state for the chat client.
#[derive(Debug, Default)]
pub struct ClientState {
    /// Name the user chats as.
    pub current_user: String,

    /// Who the user is writing to.
    pub recipient: String,

    /// Text typed but not yet sent.
    pub draft: String,

    /// The most recent successful fetch, verbatim.
    pub messages: Vec<Message>,

    /// True only while a send is in flight.
    pub loading: bool,

    /// Banner shown above the form until the next successful send.
    pub error: Option<ChatError>,

    /// Set when the message list changed and the view should scroll down.
    pub scroll_to_latest: bool,
}

impl ClientState {
    /// Create a state with the form fields pre-filled.
    pub fn new(current_user: impl Into<String>, recipient: impl Into<String>) -> Self {
        Self {
            current_user: current_user.into(),
            recipient: recipient.into(),
            ..Self::default()
        }
    }

    /// Start a send from the current form fields.
    ///
    /// Returns the payload to post, or `None` if a send is already in flight
    /// or a field is blank (the latter sets the validation banner).
    pub fn begin_send(&mut self) -> Option<OutgoingMessage> {
        if self.loading {
            debug!("send ignored, previous send still in flight");
            return None;
        }

        match validation::validate_send(&self.current_user, &self.recipient, &self.draft) {
            Ok(outgoing) => {
                self.loading = true;
                Some(outgoing)
            }
            Err(e) => {
                self.error = Some(e);
                None
            }
        }
    }

    /// The store accepted the send.
    pub fn send_succeeded(&mut self) {
        self.draft.clear();
        self.error = None;
        self.loading = false;
    }

    /// The send failed; the draft stays so the user can retry.
    pub fn send_failed(&mut self, error: ChatError) {
        self.error = Some(error);
        self.loading = false;
    }

    /// Replace the message list with a fetch result.
    pub fn replace_messages(&mut self, messages: Vec<Message>) {
        if self.messages != messages {
            self.scroll_to_latest = true;
        }
        self.messages = messages;
    }

    /// Whether `message` was written by the current user.
    pub fn is_own(&self, message: &Message) -> bool {
        message::is_own(&message.from, &self.current_user)
    }

    /// Consume a pending scroll request.
    pub fn take_scroll_request(&mut self) -> bool {
        std::mem::take(&mut self.scroll_to_latest)
    }
}
