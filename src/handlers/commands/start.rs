//! Start command handler
//!
//! Handles the /start command: track the chat, then run the greeting-image
//! flow against a loading message.

use teloxide::{prelude::*, types::Message};
use tracing::debug;

use crate::services::{greeting, ServiceFactory};
use crate::utils::errors::{Result, SakuraError};
use crate::utils::logging;

/// Handle /start command
pub async fn handle_start(bot: Bot, msg: Message, services: ServiceFactory) -> Result<()> {
    let user = msg
        .from
        .clone()
        .ok_or_else(|| SakuraError::InvalidInput("No user in message".to_string()))?;
    let chat_id = msg.chat.id;

    debug!(user_id = user.id.0, chat_id = ?chat_id, "Processing /start command");

    services.registry.record_chat(&msg.chat);
    greeting::react_to_message(&bot, &msg, services.bot_id).await;

    let loading = bot
        .send_message(chat_id, greeting::random_soft_emoji())
        .await?;
    services
        .greeting_service
        .send_greeting(chat_id, &user, Some(&loading), None)
        .await?;

    logging::log_user_action(user.id.0 as i64, "start", None);
    Ok(())
}
