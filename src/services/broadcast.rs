//! Broadcast fan-out engine
//!
//! Given a target audience and a source message, resolves the recipient
//! snapshot and delivers a copy of the message to each recipient in turn.
//! One recipient failing never aborts the rest of the run; the engine only
//! tallies the outcome and throttles itself with a fixed delay between
//! sends to stay under the Bot API's outbound rate limit.

use std::fmt;
use std::future::Future;
use std::time::Duration;

use teloxide::prelude::*;
use teloxide::types::{ChatId, Message};
use tracing::{debug, info, warn};

use crate::config::BroadcastConfig;
use crate::state::{Audience, ChatRegistry};

/// Per-run delivery tally, reported back to the owner once and discarded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BroadcastReport {
    pub attempted: usize,
    pub succeeded: usize,
    pub failed: usize,
}

impl BroadcastReport {
    /// One-line summary for the confirmation reply
    pub fn summary(&self, audience: Audience) -> String {
        let mut text = format!("📢 Broadcast sent to {} {}.", self.succeeded, audience);
        if self.failed > 0 {
            text.push_str(&format!(" {} failed.", self.failed));
        }
        text
    }
}

/// Broadcast service driving the fan-out over the chat registry
#[derive(Debug, Clone)]
pub struct BroadcastService {
    bot: Bot,
    registry: ChatRegistry,
    delay: Duration,
}

impl BroadcastService {
    /// Create a new BroadcastService instance
    pub fn new(bot: Bot, registry: ChatRegistry, config: &BroadcastConfig) -> Self {
        Self {
            bot,
            registry,
            delay: Duration::from_millis(config.delay_ms),
        }
    }

    /// Copy the source message to every chat in the selected audience
    ///
    /// Runs to completion over the snapshot resolved at the start of the
    /// call; chats recorded afterwards are not picked up mid-run.
    pub async fn broadcast(&self, source: &Message, audience: Audience) -> BroadcastReport {
        let recipients = match audience {
            Audience::Users => self.registry.users_snapshot(),
            Audience::Groups => self.registry.groups_snapshot(),
            Audience::All => self.registry.all_snapshot(),
        };

        info!(
            audience = %audience,
            recipients = recipients.len(),
            "Starting broadcast"
        );

        let bot = self.bot.clone();
        let from_chat_id = source.chat.id;
        let message_id = source.id;

        let report = self
            .fan_out(recipients, |chat_id| {
                let bot = bot.clone();
                async move {
                    bot.copy_message(chat_id, from_chat_id, message_id)
                        .await
                        .map(|_| ())
                }
            })
            .await;

        info!(
            attempted = report.attempted,
            succeeded = report.succeeded,
            failed = report.failed,
            "Broadcast finished"
        );

        report
    }

    /// Sequentially attempt delivery to each recipient, tallying outcomes
    ///
    /// Forbidden, bad-request and network errors are all the same to the
    /// tally: one failed delivery. The fixed delay runs between recipients,
    /// never before the first.
    async fn fan_out<F, Fut, E>(&self, recipients: Vec<ChatId>, mut deliver: F) -> BroadcastReport
    where
        F: FnMut(ChatId) -> Fut,
        Fut: Future<Output = std::result::Result<(), E>>,
        E: fmt::Display,
    {
        let mut report = BroadcastReport::default();

        for (index, chat_id) in recipients.into_iter().enumerate() {
            if index > 0 && !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }

            report.attempted += 1;
            match deliver(chat_id).await {
                Ok(()) => {
                    report.succeeded += 1;
                    debug!(chat_id = ?chat_id, "Broadcast delivery succeeded");
                }
                Err(e) => {
                    report.failed += 1;
                    warn!(chat_id = ?chat_id, error = %e, "Broadcast delivery failed");
                }
            }
        }

        report
    }
}
