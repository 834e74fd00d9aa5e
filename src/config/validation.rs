//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use super::Settings;
use crate::utils::errors::{Result, SakuraError};

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_bot_config(&settings.bot)?;
    validate_images_config(&settings.images)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate bot configuration
fn validate_bot_config(config: &super::BotConfig) -> Result<()> {
    if config.token.is_empty() {
        return Err(SakuraError::Config("Bot token is required".to_string()));
    }

    if config.owner_id == 0 {
        return Err(SakuraError::Config(
            "Owner user id must be configured".to_string(),
        ));
    }

    Ok(())
}

/// Validate image provider configuration
fn validate_images_config(config: &super::ImageConfig) -> Result<()> {
    if config.search_url.is_empty() {
        return Err(SakuraError::Config(
            "Image search URL is required".to_string(),
        ));
    }

    if config.timeout_seconds == 0 {
        return Err(SakuraError::Config(
            "Image fetch timeout must be greater than 0".to_string(),
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(SakuraError::Config("Log level is required".to_string()));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(SakuraError::Config(format!(
            "Invalid log level: {}. Valid levels: {:?}",
            config.level, valid_levels
        )));
    }

    Ok(())
}
