//! Command handlers module
//!
//! This module contains handlers for all bot commands like /start, /ping
//! and the owner-only /broadcast.

pub mod broadcast;
pub mod ping;
pub mod start;

use teloxide::{types::Message, utils::command::BotCommands, Bot};

use crate::services::ServiceFactory;
use crate::utils::errors::Result;

/// All available bot commands
#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "SakuraBot commands:")]
pub enum Command {
    #[command(description = "Get a greeting image")]
    Start,
    #[command(description = "Measure bot latency")]
    Ping,
    #[command(description = "Broadcast a message (owner only)")]
    Broadcast,
}

/// Main command dispatcher
pub async fn handle_command(
    bot: Bot,
    msg: Message,
    cmd: Command,
    services: ServiceFactory,
) -> Result<()> {
    match cmd {
        Command::Start => start::handle_start(bot, msg, services).await,
        Command::Ping => ping::handle_ping(bot, msg, services).await,
        Command::Broadcast => broadcast::handle_broadcast(bot, msg, services).await,
    }
}
