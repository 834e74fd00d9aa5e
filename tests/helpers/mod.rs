//! Shared test infrastructure

pub mod telegram_mock;
pub mod test_data;

use teloxide::types::UserId;
use teloxide::Bot;
use SakuraBot::{config::Settings, services::ServiceFactory};

/// Owner user id used across the integration tests
pub const OWNER_ID: i64 = 42;

/// The bot's own user id, matching the mock getMe response
pub const BOT_ID: u64 = 12345;

/// Settings wired for tests: no fan-out delay, mock-friendly token
pub fn test_settings() -> Settings {
    let mut settings = Settings::default();
    settings.bot.token = telegram_mock::TEST_TOKEN.to_string();
    settings.bot.owner_id = OWNER_ID;
    settings.broadcast.delay_ms = 0;
    settings
}

/// A bot talking to the mock server plus a fresh service factory
pub fn test_services(
    server: &telegram_mock::TelegramMockServer,
    settings: Settings,
) -> (Bot, ServiceFactory) {
    let bot = Bot::new(telegram_mock::TEST_TOKEN)
        .set_api_url(server.api_root().parse().expect("mock server url"));
    let services =
        ServiceFactory::new(bot.clone(), settings, UserId(BOT_ID)).expect("service factory");
    (bot, services)
}
