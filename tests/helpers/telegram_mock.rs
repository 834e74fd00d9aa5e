//! Mock Telegram API server for testing
//!
//! This module provides a mock HTTP server that simulates the Telegram Bot
//! API for testing purposes. It uses wiremock to create configurable mock
//! responses and to count what the bot actually sent.

use serde_json::{json, Value};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Token used by every test bot
pub const TEST_TOKEN: &str = "12345:test_token";

/// Mock Telegram API server for testing
pub struct TelegramMockServer {
    pub server: MockServer,
}

impl TelegramMockServer {
    /// Create a new mock Telegram API server
    pub async fn new() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Base URL to hand to `Bot::set_api_url`
    pub fn api_root(&self) -> String {
        self.server.uri()
    }

    fn endpoint(name: &str) -> String {
        format!("/bot{TEST_TOKEN}/{name}")
    }

    /// Mount success responses for every endpoint the bot uses
    pub async fn mock_default_success(&self) {
        self.mock_success("sendMessage", message_result("Test message"))
            .await;
        self.mock_success("editMessageText", message_result("Edited test message"))
            .await;
        self.mock_success("editMessageMedia", photo_message_result())
            .await;
        self.mock_success("sendPhoto", photo_message_result()).await;
        self.mock_success("copyMessage", json!({"message_id": 456}))
            .await;
        self.mock_success("setMessageReaction", json!(true)).await;
        self.mock_success("answerCallbackQuery", json!(true)).await;
        self.mock_success("getMe", bot_user_result()).await;
    }

    /// Mount a success response for one endpoint
    pub async fn mock_success(&self, name: &str, result: Value) {
        Mock::given(method("POST"))
            .and(path(Self::endpoint(name)))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"ok": true, "result": result})),
            )
            .mount(&self.server)
            .await;
    }

    /// Make copyMessage fail with "blocked" for one specific recipient
    ///
    /// Mounted with a higher priority than the generic success mock so it
    /// wins for matching bodies.
    pub async fn mock_copy_message_blocked_for(&self, chat_id: i64) {
        Mock::given(method("POST"))
            .and(path(Self::endpoint("copyMessage")))
            .and(body_partial_json(json!({"chat_id": chat_id})))
            .respond_with(ResponseTemplate::new(403).set_body_json(json!({
                "ok": false,
                "error_code": 403,
                "description": "Forbidden: bot was blocked by the user"
            })))
            .with_priority(1)
            .mount(&self.server)
            .await;
    }

    /// How many calls hit the given endpoint
    pub async fn count_calls(&self, name: &str) -> usize {
        let suffix = format!("/{name}");
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|request| request.url.path().ends_with(&suffix))
            .count()
    }

    /// Total number of outbound API calls the bot made
    pub async fn total_calls(&self) -> usize {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .len()
    }

    /// JSON bodies of every call to the given endpoint, in arrival order
    pub async fn bodies_for(&self, name: &str) -> Vec<Value> {
        let suffix = format!("/{name}");
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|request| request.url.path().ends_with(&suffix))
            .filter_map(|request| serde_json::from_slice(&request.body).ok())
            .collect()
    }

    /// Text fields of every sendMessage call, in arrival order
    pub async fn sent_message_texts(&self) -> Vec<String> {
        self.bodies_for("sendMessage")
            .await
            .iter()
            .filter_map(|body| body.get("text").and_then(Value::as_str))
            .map(str::to_string)
            .collect()
    }
}

/// A plain text message result, shaped the way Telegram returns it
pub fn message_result(text: &str) -> Value {
    json!({
        "message_id": 123,
        "from": bot_user_result(),
        "chat": {
            "id": 42,
            "first_name": "Owner",
            "type": "private"
        },
        "date": 1640995200,
        "text": text
    })
}

/// A photo message result for sendPhoto / editMessageMedia
pub fn photo_message_result() -> Value {
    json!({
        "message_id": 124,
        "from": bot_user_result(),
        "chat": {
            "id": 42,
            "first_name": "Owner",
            "type": "private"
        },
        "date": 1640995200,
        "photo": [{
            "file_id": "photo_file_id",
            "file_unique_id": "photo_unique_id",
            "width": 1920,
            "height": 1080,
            "file_size": 123456
        }]
    })
}

/// The bot's own user record, as returned by getMe
pub fn bot_user_result() -> Value {
    json!({
        "id": 12345,
        "is_bot": true,
        "first_name": "SakuraBot",
        "username": "sakura_test_bot"
    })
}
