//! SakuraBot Telegram Bot
//!
//! A small Telegram bot that greets chats with random flower images, echoes
//! messages back with emoji reactions, and lets its owner broadcast a
//! message to every tracked user or group chat.

#![allow(non_snake_case)]

pub mod config;
pub mod handlers;
pub mod health;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use services::ServiceFactory;
pub use state::{Audience, ChatRegistry, ChatScope, PendingBroadcasts};
pub use utils::errors::{Result, SakuraError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
