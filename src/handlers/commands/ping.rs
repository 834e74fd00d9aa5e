//! Ping command handler

use std::time::Instant;

use teloxide::payloads::EditMessageTextSetters;
use teloxide::{
    prelude::*,
    types::{Message, ParseMode},
};
use tracing::debug;

use crate::services::{greeting, ServiceFactory};
use crate::utils::errors::Result;

/// Handle /ping command
///
/// Latency is the round trip of one sendMessage call, reported by editing
/// the same message.
pub async fn handle_ping(bot: Bot, msg: Message, services: ServiceFactory) -> Result<()> {
    greeting::react_to_message(&bot, &msg, services.bot_id).await;

    let started = Instant::now();
    let sent = bot.send_message(msg.chat.id, "🛰️ Pinging...").await?;
    let latency_ms = started.elapsed().as_millis();

    debug!(chat_id = ?msg.chat.id, latency_ms = latency_ms as u64, "Ping measured");

    bot.edit_message_text(
        msg.chat.id,
        sent.id,
        format!("🏓 <b>PONG!</b> {latency_ms}ms"),
    )
    .parse_mode(ParseMode::Html)
    .await?;

    Ok(())
}
