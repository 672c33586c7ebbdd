//! HotPink Connect - a two-user chat client built with egui
//!
//! Architecture:
//! - Main thread: runs the egui UI
//! - Backend thread: runs a Tokio runtime for polling and sends
//! - Communication via crossbeam channels (lock-free, sync-safe)

use hotpink_connect::app::{native_options, HotPinkApp};
use hotpink_connect::config::load_settings;
use hotpink_connect::logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let settings = load_settings().unwrap_or_default();
    let client = HotPinkApp::connect(&settings)?;

    eframe::run_native(
        "HotPink Connect",
        native_options(),
        Box::new(move |cc| Ok(Box::new(HotPinkApp::new(cc, client, settings)))),
    )?;
    Ok(())
}
