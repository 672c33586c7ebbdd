//! Backend main loop: the poll timer plus action dispatch.

use std::ops::ControlFlow;
use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::{Receiver, Sender, TryRecvError};
use tokio::runtime::Runtime;
use tokio::time::{interval, timeout, MissedTickBehavior};
use tracing::{debug, error, info};

use super::handlers;
use crate::protocol::{BackendAction, GuiEvent};
use crate::store::ChatStore;

/// How often the message list is refreshed.
pub const POLL_INTERVAL: Duration = Duration::from_secs(3);

/// How long to wait on the timer before checking for UI actions again.
const ACTION_CHECK_INTERVAL: Duration = Duration::from_millis(50);

/// Run the backend event loop on a tokio runtime.
///
/// Fetches immediately, then every `poll_interval` until `Shutdown` arrives or
/// the UI drops its end of the action channel.
pub fn run_backend(
    store: Arc<dyn ChatStore>,
    poll_interval: Duration,
    action_rx: Receiver<BackendAction>,
    event_tx: Sender<GuiEvent>,
) {
    // Create a Tokio runtime for this thread
    let rt = match Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            error!(error = %e, "failed to create tokio runtime");
            return;
        }
    };

    rt.block_on(async move {
        // First tick completes immediately, which gives the activation fetch
        let mut poll_timer = interval(poll_interval);
        poll_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
        info!(?poll_interval, "polling started");

        loop {
            // Check for actions from the UI (non-blocking)
            loop {
                match action_rx.try_recv() {
                    Ok(action) => {
                        if let ControlFlow::Break(()) =
                            handlers::handle_backend_action(action, &store, &event_tx)
                        {
                            info!("polling stopped");
                            return;
                        }
                    }
                    Err(TryRecvError::Empty) => break,
                    Err(TryRecvError::Disconnected) => {
                        debug!("action channel closed");
                        info!("polling stopped");
                        return;
                    }
                }
            }

            // Wait on the timer (with short timeout so we can check for actions)
            if timeout(ACTION_CHECK_INTERVAL, poll_timer.tick()).await.is_ok() {
                handlers::spawn_fetch(store.clone(), event_tx.clone());
            }
        }
    });
}
