//! Message handlers module
//!
//! The router for plain messages. Priority order matters here: pending
//! broadcast content from the owner wins over the keyword trigger, which
//! wins over the generic echo.

use teloxide::payloads::SendMessageSetters;
use teloxide::{
    prelude::*,
    types::{Message, MessageId, ReplyParameters, User, UserId},
};
use tracing::{debug, warn};

use crate::services::{greeting, ServiceFactory};
use crate::state::PendingBroadcasts;
use crate::utils::errors::Result;

/// Handle an incoming plain message
pub async fn handle_message(bot: Bot, msg: Message, services: ServiceFactory) -> Result<()> {
    services.registry.record_chat(&msg.chat);

    let Some(user) = msg.from.clone() else {
        // Channel posts and service messages carry no sender
        return Ok(());
    };

    debug!(user_id = user.id.0, chat_id = ?msg.chat.id, "Routing message");

    if is_owner_broadcast_content(&msg, &services.pending, services.settings.bot.owner_id) {
        return handle_broadcast_content(bot, msg, &user, services).await;
    }

    let text = msg.text().unwrap_or_default();
    if matches_keyword(text, &services.settings.bot.trigger_keyword) {
        return handle_keyword_greeting(bot, msg, &user, services).await;
    }

    if msg.chat.is_private() {
        greeting::react_to_message(&bot, &msg, services.bot_id).await;
        echo_message(&bot, &msg, None).await;
        return Ok(());
    }

    if is_reply_to_bot(&msg, services.bot_id) {
        greeting::react_to_message(&bot, &msg, services.bot_id).await;
        echo_message(&bot, &msg, Some(msg.id)).await;
    }

    Ok(())
}

/// Does this message consume a pending broadcast selection?
///
/// True when the sender is the configured owner and a target selection is
/// waiting for content. Evaluated before any other message handling.
pub fn is_owner_broadcast_content(
    msg: &Message,
    pending: &PendingBroadcasts,
    owner_id: i64,
) -> bool {
    match msg.from.as_ref() {
        Some(user) => user.id.0 as i64 == owner_id && pending.has_pending(user.id),
        None => false,
    }
}

/// Case-insensitive substring match against the configured trigger keyword
pub fn matches_keyword(text: &str, keyword: &str) -> bool {
    !keyword.is_empty() && text.to_lowercase().contains(&keyword.to_lowercase())
}

/// Is this message a reply to one of the bot's own messages?
pub fn is_reply_to_bot(msg: &Message, bot_id: UserId) -> bool {
    msg.reply_to_message()
        .and_then(|reply| reply.from.as_ref())
        .map(|from| from.id == bot_id)
        .unwrap_or(false)
}

/// Consume the pending selection and run the fan-out
async fn handle_broadcast_content(
    bot: Bot,
    msg: Message,
    user: &User,
    services: ServiceFactory,
) -> Result<()> {
    let Some(audience) = services.pending.take(user.id) else {
        // A near-simultaneous message already consumed the selection
        debug!(user_id = user.id.0, "Pending selection already consumed");
        return Ok(());
    };

    let report = services.broadcast_service.broadcast(&msg, audience).await;
    bot.send_message(msg.chat.id, report.summary(audience))
        .await?;

    Ok(())
}

/// Run the greeting-image flow for a keyword trigger
async fn handle_keyword_greeting(
    bot: Bot,
    msg: Message,
    user: &User,
    services: ServiceFactory,
) -> Result<()> {
    greeting::react_to_message(&bot, &msg, services.bot_id).await;

    // Reply to the triggering message in groups, plain send in private
    let reply_to = if msg.chat.is_private() {
        None
    } else {
        Some(msg.id)
    };

    let mut loading_request = bot.send_message(msg.chat.id, greeting::random_soft_emoji());
    if let Some(reply_to) = reply_to {
        loading_request = loading_request.reply_parameters(ReplyParameters::new(reply_to));
    }
    let loading = loading_request.await?;

    services
        .greeting_service
        .send_greeting(msg.chat.id, user, Some(&loading), None)
        .await
}

/// Copy a message back into its own chat
async fn echo_message(bot: &Bot, msg: &Message, reply_to: Option<MessageId>) {
    let mut request = bot.copy_message(msg.chat.id, msg.chat.id, msg.id);
    if let Some(reply_to) = reply_to {
        request = request.reply_parameters(ReplyParameters::new(reply_to));
    }

    if let Err(e) = request.await {
        warn!(chat_id = ?msg.chat.id, error = %e, "Echo failed");
    }
}
