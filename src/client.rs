//! The chat client: session state plus the backend thread that feeds it.
//!
//! `ChatClient` owns the poll timer as a resource. `activate` spawns the
//! backend thread (which fetches immediately, then on every tick) and
//! `teardown` stops it. Results that arrive after teardown are dropped
//! without touching the state.

use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{unbounded, Receiver, Sender};
use tracing::{debug, warn};

use crate::backend::run_backend;
use crate::config::ChatConfig;
use crate::error::{ChatError, TransportError};
use crate::events;
use crate::protocol::{BackendAction, GuiEvent};
use crate::state::ClientState;
use crate::store::{ChatStore, HttpChatStore};

pub struct ChatClient {
    /// Session state rendered by the UI
    pub state: ClientState,

    // Channels for backend communication
    action_tx: Sender<BackendAction>,
    event_rx: Receiver<GuiEvent>,

    backend: Option<JoinHandle<()>>,
    active: bool,
}

impl ChatClient {
    /// Start polling the HTTP store described by `config`.
    pub fn activate(config: &ChatConfig, state: ClientState) -> Result<Self, TransportError> {
        let store = HttpChatStore::with_timeout(config.base_url.clone(), config.request_timeout)?;
        Ok(Self::activate_with_store(Arc::new(store), config.poll_interval, state))
    }

    /// Start polling an arbitrary store.
    pub fn activate_with_store(
        store: Arc<dyn ChatStore>,
        poll_interval: Duration,
        state: ClientState,
    ) -> Self {
        // Create channels for UI <-> Backend
        let (action_tx, action_rx) = unbounded::<BackendAction>();
        let (event_tx, event_rx) = unbounded::<GuiEvent>();

        // Spawn the backend thread
        let backend = thread::spawn(move || {
            run_backend(store, poll_interval, action_rx, event_tx);
        });

        Self::from_parts(state, action_tx, event_rx, Some(backend))
    }

    pub(crate) fn from_parts(
        state: ClientState,
        action_tx: Sender<BackendAction>,
        event_rx: Receiver<GuiEvent>,
        backend: Option<JoinHandle<()>>,
    ) -> Self {
        Self {
            state,
            action_tx,
            event_rx,
            backend,
            active: true,
        }
    }

    /// Send the current draft.
    ///
    /// Returns `true` if a request was handed to the backend. Blank fields set
    /// the validation banner instead; a send already in flight is ignored.
    pub fn send(&mut self) -> bool {
        if !self.active {
            return false;
        }

        let Some(outgoing) = self.state.begin_send() else {
            return false;
        };

        if self.action_tx.send(BackendAction::Send(outgoing)).is_err() {
            warn!("backend is gone, send dropped");
            self.state.send_failed(ChatError::SendFailed);
            return false;
        }
        true
    }

    /// Apply every pending backend event. Returns how many were applied.
    pub fn process_events(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.event_rx.try_recv() {
            if !self.active {
                debug!(?event, "discarding event after teardown");
                continue;
            }
            events::process_single_event(&mut self.state, event);
            applied += 1;
        }
        applied
    }

    /// Stop polling. Requests already in flight may still finish, but their
    /// results are discarded.
    pub fn teardown(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;

        let _ = self.action_tx.send(BackendAction::Shutdown);
        if let Some(handle) = self.backend.take() {
            if handle.join().is_err() {
                warn!("backend thread panicked");
            }
        }
    }
}

impl Drop for ChatClient {
    fn drop(&mut self) {
        self.teardown();
    }
}
