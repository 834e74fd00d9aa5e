//! Callback query handlers module
//!
//! This module contains handlers for all inline keyboard button callbacks

use teloxide::{
    prelude::*,
    types::{CallbackQuery, MaybeInaccessibleMessage, UserId},
};
use tracing::{debug, info, warn};

use crate::services::ServiceFactory;
use crate::state::Audience;
use crate::utils::errors::Result;

/// Main callback query dispatcher
pub async fn handle_callback_query(
    bot: Bot,
    query: CallbackQuery,
    services: ServiceFactory,
) -> Result<()> {
    let user_id = query.from.id;
    debug!(user_id = user_id.0, callback_data = ?query.data, "Processing callback query");

    let Some(data) = query.data.clone() else {
        return Ok(());
    };

    // Answer first to clear the client-side loading state
    if let Err(e) = bot.answer_callback_query(query.id.clone()).await {
        warn!(error = %e, "Failed to answer callback query");
    }

    let parts: Vec<&str> = data.split(':').collect();
    match parts.as_slice() {
        ["broadcast", target] => {
            handle_broadcast_choice(bot, &query, user_id, target, &services).await
        }
        _ => {
            warn!(data = %data, "Unknown callback action");
            Ok(())
        }
    }
}

/// Handle a broadcast target-selection button
async fn handle_broadcast_choice(
    bot: Bot,
    query: &CallbackQuery,
    user_id: UserId,
    target: &str,
    services: &ServiceFactory,
) -> Result<()> {
    let Some(MaybeInaccessibleMessage::Regular(prompt)) = &query.message else {
        return Ok(());
    };
    let chat_id = prompt.chat.id;
    let message_id = prompt.id;

    if target == "cancel" {
        services.pending.clear(user_id);
        bot.edit_message_text(chat_id, message_id, "❌ Broadcast cancelled.")
            .await?;
        info!(user_id = user_id.0, "Broadcast cancelled");
        return Ok(());
    }

    let Some(audience) = Audience::parse(target) else {
        warn!(target = %target, "Unknown broadcast target");
        return Ok(());
    };

    services.pending.set(user_id, audience);
    bot.edit_message_text(
        chat_id,
        message_id,
        format!("✅ Send the message you want to broadcast to {audience}."),
    )
    .await?;

    Ok(())
}
