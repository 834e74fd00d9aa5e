//! Greeting service implementation
//!
//! Randomized welcome messages with an HTML mention of the recipient, paired
//! with a random image from the image provider. The flow edits a previously
//! sent loading message into the final photo; when the provider has no image
//! the loading message is turned into a plain-text notice instead.

use rand::seq::SliceRandom;
use teloxide::payloads::{SendPhotoSetters, SetMessageReactionSetters};
use teloxide::prelude::*;
use teloxide::types::{
    ChatId, InputFile, InputMedia, InputMediaPhoto, Message, MessageId, ParseMode, ReactionType,
    ReplyParameters, User, UserId,
};
use teloxide::utils::html;
use tracing::{debug, warn};

use crate::services::images::ImageService;
use crate::utils::errors::Result;

/// Emojis used for loading messages and reactions
const SOFT_EMOJIS: &[&str] = &[
    "⛅", "🌤️", "❣️", "💖", "🌸", "💝", "💘", "💗", "💓", "💞", "❤️‍🔥", "🌹", "🌺", "🌼",
    "🌷", "💐", "🕊️", "🐱", "🐈", "💌",
];

/// Welcome templates, `{mention}` is replaced with an HTML link to the user
const WELCOME_TEMPLATES: &[&str] = &[
    "Hello {mention} just wanted to share something with love 💖",
    "This is sent with care {mention} nothing more nothing less 💌",
    "Wishing you a peaceful moment {mention} 💫",
    "No reason {mention} just something warm for your heart 🌸",
    "You crossed my thoughts {mention} so here is this 🌷",
    "May this bring quiet joy to your day {mention} 🕊️",
    "No noise no rush {mention} just a soft pause 💗",
    "Take this small piece of peace {mention} 🌼",
    "You are here and that is enough {mention} 🌙",
    "For your gentle soul {mention} with kindness 💝",
    "This carries no message {mention} only warmth 💞",
    "Nothing big {mention} just a reminder you matter 🍃",
    "Let this be a calm second in your day {mention} ✨",
    "No need to smile {mention} just feel what is here 💓",
    "This is not special {mention} but it is real 💗",
    "You deserve kindness without reason {mention} 🌤️",
    "A quiet hello for your heart {mention} 🍀",
    "This carries no answers {mention} only softness 🌺",
    "Even in silence {mention} this speaks with love 🕯️",
    "This is for you {mention} without asking why 💌",
    "Not for fixing just for feeling {mention} 💮",
    "Let this rest with you {mention} no need to do anything 🧸",
    "You are not forgotten {mention} even in stillness 🌌",
    "There is nothing to prove {mention} just take this 💘",
    "Without words without reason {mention} just presence 🌷",
    "It is okay to pause {mention} let this moment be yours 🫶",
    "With no pressure no weight {mention} just love 💞",
    "This is here for you {mention} without expectation 🐥",
    "Your presence matters {mention} quietly and truly 🌈",
    "May this bring a quiet breath to your heart {mention} 🌿",
];

/// Pick one soft emoji at random
pub fn random_soft_emoji() -> &'static str {
    SOFT_EMOJIS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or("🌸")
}

/// Attempt a soft-emoji reaction on a message
///
/// Private chats always get a reaction; group chats only when the message
/// replies to one of the bot's own messages. Failures are logged and
/// swallowed, Telegram rejects reactions in plenty of legitimate situations.
pub async fn react_to_message(bot: &Bot, msg: &Message, bot_id: UserId) {
    let should_react = if msg.chat.is_private() {
        true
    } else if msg.chat.is_group() || msg.chat.is_supergroup() {
        msg.reply_to_message()
            .and_then(|reply| reply.from.as_ref())
            .map(|from| from.id == bot_id)
            .unwrap_or(false)
    } else {
        false
    };

    if !should_react {
        return;
    }

    let emoji = random_soft_emoji();
    let reaction = ReactionType::Emoji {
        emoji: emoji.to_string(),
    };
    if let Err(e) = bot
        .set_message_reaction(msg.chat.id, msg.id)
        .reaction(vec![reaction])
        .await
    {
        warn!(chat_id = ?msg.chat.id, error = %e, "Failed to set reaction");
    }
}

/// Greeting service for welcome images and captions
#[derive(Debug, Clone)]
pub struct GreetingService {
    bot: Bot,
    images: ImageService,
}

impl GreetingService {
    /// Create a new GreetingService instance
    pub fn new(bot: Bot, images: ImageService) -> Self {
        Self { bot, images }
    }

    /// Send a greeting image with a randomized caption to a chat
    ///
    /// When `loading` is given, that message is edited in place (media on
    /// success, text notice on failure); otherwise a fresh photo message is
    /// sent, replying to `reply_to` when set.
    pub async fn send_greeting(
        &self,
        chat_id: ChatId,
        user: &User,
        loading: Option<&Message>,
        reply_to: Option<MessageId>,
    ) -> Result<()> {
        let image_url = match self.images.random_image().await {
            Ok(url) => url,
            Err(e) => {
                warn!(error = %e, "Image fetch failed");
                None
            }
        };

        let Some(url) = image_url else {
            let notice = "⚠️ Could not fetch a greeting image right now.";
            match loading {
                Some(message) => {
                    self.bot
                        .edit_message_text(message.chat.id, message.id, notice)
                        .await?;
                }
                None => {
                    self.bot.send_message(chat_id, notice).await?;
                }
            }
            return Ok(());
        };

        let caption = render_greeting(user);
        debug!(chat_id = ?chat_id, user_id = user.id.0, image = %url, "Sending greeting image");

        match loading {
            Some(message) => {
                let media = InputMedia::Photo(
                    InputMediaPhoto::new(InputFile::url(url))
                        .caption(caption)
                        .parse_mode(ParseMode::Html),
                );
                self.bot
                    .edit_message_media(message.chat.id, message.id, media)
                    .await?;
            }
            None => {
                let mut request = self
                    .bot
                    .send_photo(chat_id, InputFile::url(url))
                    .caption(caption)
                    .parse_mode(ParseMode::Html);
                if let Some(reply_to) = reply_to {
                    request = request.reply_parameters(ReplyParameters::new(reply_to));
                }
                request.await?;
            }
        }

        Ok(())
    }
}

/// Render a random welcome template with an HTML mention of the user
fn render_greeting(user: &User) -> String {
    let name = match &user.last_name {
        Some(last_name) => format!("{} {}", user.first_name, last_name),
        None => user.first_name.clone(),
    };
    let mention = format!(
        "<a href='tg://user?id={}'>{}</a>",
        user.id,
        html::escape(&name)
    );

    WELCOME_TEMPLATES
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(WELCOME_TEMPLATES[0])
        .replace("{mention}", &mention)
}
