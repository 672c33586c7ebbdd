//! HotPink Connect client library.
//!
//! A two-party chat client that polls a remote HTTP message store every
//! three seconds and posts new messages to it. This module re-exports the
//! core components for testing and extension.

pub mod app;
pub mod backend;
pub mod client;
pub mod config;
pub mod error;
pub mod events;
pub mod logging;
pub mod message;
pub mod protocol;
pub mod state;
pub mod store;
pub mod ui;
pub mod validation;

#[cfg(test)]
mod backend_tests;

pub use client::ChatClient;
pub use error::{ChatError, TransportError};
pub use message::{is_own, Message, OutgoingMessage};
pub use state::ClientState;
pub use store::{ChatStore, HttpChatStore};
