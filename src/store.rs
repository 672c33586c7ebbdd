//! Remote message store client.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use crate::error::TransportError;
use crate::message::{Message, OutgoingMessage};

/// The two operations the chat client needs from a message store.
#[async_trait]
pub trait ChatStore: Send + Sync {
    /// Fetch every message, in the order the store returns them.
    async fn list_messages(&self) -> Result<Vec<Message>, TransportError>;

    /// Record a new message.
    async fn send_message(&self, message: &OutgoingMessage) -> Result<(), TransportError>;
}

/// Store reached over HTTP at `{base_url}/chat`.
pub struct HttpChatStore {
    client: Client,
    base_url: String,
}

impl HttpChatStore {
    /// Create a store on top of an existing client.
    #[must_use]
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Create a store with its own client and a per-request timeout.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self, TransportError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::new(client, base_url))
    }

    fn chat_url(&self) -> String {
        format!("{}/chat", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl ChatStore for HttpChatStore {
    async fn list_messages(&self) -> Result<Vec<Message>, TransportError> {
        let response = self.client.get(self.chat_url()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status));
        }

        let messages: Vec<Message> = response.json().await?;
        debug!(count = messages.len(), "fetched messages");
        Ok(messages)
    }

    async fn send_message(&self, message: &OutgoingMessage) -> Result<(), TransportError> {
        let response = self
            .client
            .post(self.chat_url())
            .json(message)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status));
        }

        debug!(to = %message.to, "message accepted by store");
        Ok(())
    }
}
