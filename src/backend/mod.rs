/// Backend submodules for polling and send handling
///
/// - `handlers`: fetch/send tasks and action routing
/// - `main_loop`: runtime setup and the poll timer loop
mod handlers;
mod main_loop;

// Re-export the main backend entry points
pub use main_loop::{run_backend, POLL_INTERVAL};
