//! Services module
//!
//! This module contains business logic services

pub mod broadcast;
pub mod greeting;
pub mod images;

// Re-export commonly used services
pub use broadcast::{BroadcastReport, BroadcastService};
pub use greeting::GreetingService;
pub use images::ImageService;

use teloxide::prelude::*;
use teloxide::types::UserId;

use crate::config::Settings;
use crate::state::{ChatRegistry, PendingBroadcasts};
use crate::utils::errors::Result;

/// Service factory for creating and managing all services
///
/// Built once at startup and shared with every handler invocation through
/// the dispatcher's dependency injection. Clones share the registry and
/// pending-selection state.
#[derive(Clone)]
pub struct ServiceFactory {
    pub settings: Settings,
    /// The bot's own user id, resolved once at startup via getMe
    pub bot_id: UserId,
    pub registry: ChatRegistry,
    pub pending: PendingBroadcasts,
    pub broadcast_service: BroadcastService,
    pub greeting_service: GreetingService,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services initialized
    pub fn new(bot: Bot, settings: Settings, bot_id: UserId) -> Result<Self> {
        let registry = ChatRegistry::new();
        let pending = PendingBroadcasts::new();
        let broadcast_service =
            BroadcastService::new(bot.clone(), registry.clone(), &settings.broadcast);
        let image_service = ImageService::new(&settings.images)?;
        let greeting_service = GreetingService::new(bot, image_service);

        Ok(Self {
            settings,
            bot_id,
            registry,
            pending,
            broadcast_service,
            greeting_service,
        })
    }
}
