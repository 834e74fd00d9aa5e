//! Test data helpers for creating test objects
//!
//! This module provides helper functions for creating test Telegram
//! messages, callback queries, users, and other test data structures.

use chrono::Utc;
use teloxide::types::{
    CallbackQuery, Chat, ChatId, ChatKind, ChatPrivate, ChatPublic, MaybeInaccessibleMessage,
    MediaKind, MediaText, Message, MessageCommon, MessageId, MessageKind, PublicChatKind,
    PublicChatSupergroup, User, UserId,
};

/// Helper function to create a test Telegram user
pub fn create_test_user(user_id: u64, first_name: &str, is_bot: bool) -> User {
    User {
        id: UserId(user_id),
        is_bot,
        first_name: first_name.to_string(),
        last_name: None,
        username: Some(format!("user_{user_id}")),
        language_code: Some("en".to_string()),
        is_premium: false,
        added_to_attachment_menu: false,
    }
}

/// Helper function to create a test private chat
pub fn create_test_private_chat(chat_id: i64) -> Chat {
    Chat {
        id: ChatId(chat_id),
        kind: ChatKind::Private(ChatPrivate {
            username: None,
            first_name: Some("TestUser".to_string()),
            last_name: None,
        }),
    }
}

/// Helper function to create a test group chat
pub fn create_test_group_chat(chat_id: i64) -> Chat {
    Chat {
        id: ChatId(chat_id),
        kind: ChatKind::Public(ChatPublic {
            title: Some("Test Group".to_string()),
            kind: PublicChatKind::Supergroup(PublicChatSupergroup {
                username: None,
                is_forum: false,
            }),
        }),
    }
}

/// Helper function to create a test text message
///
/// A positive `chat_id` becomes a private chat, a non-positive one a group.
pub fn create_test_message(user_id: u64, chat_id: i64, text: &str) -> Message {
    build_message(
        create_test_user(user_id, "TestUser", false),
        chat_for(chat_id),
        text,
        None,
    )
}

/// A group message replying to one of the bot's own messages
pub fn create_reply_to_bot_message(
    user_id: u64,
    chat_id: i64,
    text: &str,
    bot_id: u64,
) -> Message {
    let bot_message = build_message(
        create_test_user(bot_id, "SakuraBot", true),
        chat_for(chat_id),
        "earlier bot message",
        None,
    );
    build_message(
        create_test_user(user_id, "TestUser", false),
        chat_for(chat_id),
        text,
        Some(Box::new(bot_message)),
    )
}

/// Helper function to create a test callback query
pub fn create_test_callback_query(user_id: u64, chat_id: i64, data: &str) -> CallbackQuery {
    let user = create_test_user(user_id, "TestUser", false);
    let prompt = create_test_message(user_id, chat_id, "📢 Choose broadcast target:");

    CallbackQuery {
        id: format!("callback_{user_id}"),
        from: user,
        message: Some(MaybeInaccessibleMessage::Regular(Box::new(prompt))),
        inline_message_id: None,
        data: Some(data.to_string()),
        game_short_name: None,
        chat_instance: "test_chat_instance".to_string(),
    }
}

fn chat_for(chat_id: i64) -> Chat {
    if chat_id > 0 {
        create_test_private_chat(chat_id)
    } else {
        create_test_group_chat(chat_id)
    }
}

fn build_message(
    from: User,
    chat: Chat,
    text: &str,
    reply_to_message: Option<Box<Message>>,
) -> Message {
    Message {
        id: MessageId(1),
        thread_id: None,
        from: Some(from),
        sender_chat: None,
        sender_business_bot: None,
        date: Utc::now(),
        chat,
        is_topic_message: false,
        via_bot: None,
        kind: MessageKind::Common(MessageCommon {
            author_signature: None,
            forward_origin: None,
            external_reply: None,
            quote: None,
            reply_to_story: None,
            edit_date: None,
            media_kind: MediaKind::Text(MediaText {
                text: text.to_string(),
                entities: vec![],
                link_preview_options: None,
            }),
            reply_markup: None,
            effect_id: None,
            reply_to_message,
            sender_boost_count: None,
            is_automatic_forward: false,
            has_protected_content: false,
            is_from_offline: false,
            business_connection_id: None,
        }),
    }
}
