//! UI rendering modules for the chat client.
//!
//! - `messages`: the scrolling message list
//! - `theme`: palette and global style

pub mod messages;
pub mod theme;

pub use messages::render_messages;
pub use theme::{apply_app_style, HotPinkTheme};
