//! Broadcast command handler
//!
//! Owner-only entry point of the broadcast flow. Anyone else invoking the
//! command gets no reply at all.

use teloxide::payloads::SendMessageSetters;
use teloxide::{
    prelude::*,
    types::{InlineKeyboardButton, InlineKeyboardMarkup, Message},
};
use tracing::debug;

use crate::services::ServiceFactory;
use crate::utils::errors::Result;

/// Handle /broadcast command
pub async fn handle_broadcast(bot: Bot, msg: Message, services: ServiceFactory) -> Result<()> {
    let Some(user) = msg.from.as_ref() else {
        return Ok(());
    };

    if user.id.0 as i64 != services.settings.bot.owner_id {
        debug!(user_id = user.id.0, "Ignoring /broadcast from non-owner");
        return Ok(());
    }

    let (users, groups) = services.registry.counts();
    debug!(users = users, groups = groups, "Opening broadcast target prompt");

    bot.send_message(msg.chat.id, "📢 Choose broadcast target:")
        .reply_markup(target_keyboard())
        .await?;

    Ok(())
}

/// Inline keyboard with the broadcast target choices
pub fn target_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        vec![InlineKeyboardButton::callback(
            "📬 To Users",
            "broadcast:users",
        )],
        vec![InlineKeyboardButton::callback(
            "👥 To Groups",
            "broadcast:groups",
        )],
        vec![InlineKeyboardButton::callback("🌐 To All", "broadcast:all")],
        vec![InlineKeyboardButton::callback(
            "❌ Cancel",
            "broadcast:cancel",
        )],
    ])
}
