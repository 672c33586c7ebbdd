//! Application module structure for HotPinkApp
//!
//! - `core`: HotPinkApp struct, initialization and settings persistence
//! - `update`: Main update loop
//! - `ui::panels`: Header and central message panel
//! - `ui::input`: Name/recipient/draft form with the send button

pub mod core;
pub mod ui;
pub mod update;

// Re-export HotPinkApp for public API
pub use self::core::{native_options, HotPinkApp};
