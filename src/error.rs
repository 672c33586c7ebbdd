//! Error types for the chat store and the send path.

use reqwest::StatusCode;
use thiserror::Error;

/// Failure talking to the remote store.
#[derive(Error, Debug)]
pub enum TransportError {
    /// Network failure, timeout or undecodable body.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The store answered with a non-success status.
    #[error("store returned {0}")]
    Status(StatusCode),
}

/// Errors shown to the user in the banner.
///
/// `Display` is exactly the banner text; no status codes or response bodies
/// ever reach the user.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatError {
    /// A required field was blank after trimming.
    #[error("Please fill all fields")]
    Validation,

    /// The store rejected the send with a non-success status.
    #[error("Failed to send message")]
    SendRejected,

    /// The send never got a response.
    #[error("Error sending message")]
    SendFailed,
}

impl From<&TransportError> for ChatError {
    fn from(err: &TransportError) -> Self {
        match err {
            TransportError::Status(_) => ChatError::SendRejected,
            TransportError::Request(_) => ChatError::SendFailed,
        }
    }
}
