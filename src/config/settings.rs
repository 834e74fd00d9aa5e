//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub bot: BotConfig,
    pub images: ImageConfig,
    pub broadcast: BroadcastConfig,
    pub health: HealthConfig,
    pub logging: LoggingConfig,
}

/// Telegram bot configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BotConfig {
    pub token: String,
    /// Telegram user id allowed to run /broadcast
    pub owner_id: i64,
    /// Substring that triggers the greeting flow, matched case-insensitively
    pub trigger_keyword: String,
}

/// Random-image provider configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ImageConfig {
    pub search_url: String,
    pub timeout_seconds: u64,
}

/// Broadcast fan-out configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BroadcastConfig {
    /// Delay between consecutive deliveries, keeps us under the outbound rate limit
    pub delay_ms: u64,
}

/// Health check listener configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HealthConfig {
    pub port: u16,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub file_path: String,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    ///
    /// The bare `BOT_TOKEN`, `OWNER_ID` and `PORT` variables used by the
    /// hosting platform override anything from the file or the
    /// `SAKURABOT`-prefixed environment.
    pub fn new() -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("SAKURABOT").separator("__"));

        if let Ok(token) = std::env::var("BOT_TOKEN") {
            builder = builder.set_override("bot.token", token)?;
        }
        if let Ok(owner_id) = std::env::var("OWNER_ID") {
            builder = builder.set_override("bot.owner_id", owner_id)?;
        }
        if let Ok(port) = std::env::var("PORT") {
            builder = builder.set_override("health.port", port)?;
        }

        let settings = builder.build()?;
        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::SakuraError> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bot: BotConfig::default(),
            images: ImageConfig::default(),
            broadcast: BroadcastConfig::default(),
            health: HealthConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            owner_id: 0,
            trigger_keyword: "billu".to_string(),
        }
    }
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            search_url:
                "https://wallhaven.cc/api/v1/search?q=flower&ratios=16x9&sorting=random&categories=100&purity=100"
                    .to_string(),
            timeout_seconds: 10,
        }
    }
}

impl Default for BroadcastConfig {
    fn default() -> Self {
        Self { delay_ms: 50 }
    }
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self { port: 5000 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_path: "./logs".to_string(),
        }
    }
}
