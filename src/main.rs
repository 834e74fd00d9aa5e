//! SakuraBot Telegram Bot
//!
//! Main application entry point

#![allow(non_snake_case)]

use std::sync::Arc;

use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;
use teloxide::types::{BotCommand, Update};
use tracing::{error, info, warn};

use SakuraBot::{
    config::Settings,
    handlers::{callbacks, commands, messages},
    health,
    services::ServiceFactory,
    utils::logging,
};

type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging; the guard keeps the file writer alive
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting SakuraBot...");

    // Health check listener for the hosting platform
    let health_port = settings.health.port;
    tokio::spawn(async move {
        if let Err(e) = health::serve(health_port).await {
            error!(error = %e, "Health check listener failed");
        }
    });

    // Initialize bot
    let bot = Bot::new(&settings.bot.token);
    let me = bot.get_me().await?;
    info!(bot_id = me.id.0, username = ?me.username, "Connected to Telegram");

    // Only /start is advertised in the command menu
    if let Err(e) = bot
        .set_my_commands(vec![BotCommand::new("start", "🌸 Get a greeting image")])
        .await
    {
        warn!(error = %e, "Failed to register bot commands");
    }

    // Initialize services
    info!("Initializing services...");
    let services = ServiceFactory::new(bot.clone(), settings.clone(), me.id)?;
    let services_arc = Arc::new(services);

    // Create dispatcher with dependencies registered
    let handler = create_handler();
    let mut dispatcher = Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![services_arc])
        .default_handler(|upd| async move {
            warn!("Unhandled update: {:?}", upd);
        })
        .enable_ctrlc_handler()
        .build();

    info!("SakuraBot is ready, starting long polling");
    dispatcher.dispatch().await;

    info!("SakuraBot has been shut down.");
    Ok(())
}

/// Create the main update handler
fn create_handler() -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
    use teloxide::dispatching::UpdateFilterExt;

    dptree::entry()
        .branch(
            Update::filter_message()
                .branch(
                    // Handle commands
                    dptree::entry()
                        .filter_command::<commands::Command>()
                        .endpoint(handle_commands),
                )
                .branch(
                    // Handle regular messages
                    dptree::endpoint(handle_messages),
                ),
        )
        .branch(
            // Handle callback queries
            Update::filter_callback_query().endpoint(handle_callbacks),
        )
}

/// Handle bot commands
async fn handle_commands(
    bot: Bot,
    msg: Message,
    cmd: commands::Command,
    services: Arc<ServiceFactory>,
) -> HandlerResult {
    let services = (*services).clone();

    if let Err(e) = commands::handle_command(bot, msg, cmd, services).await {
        error!(error = %e, "Error handling command");
        return Err(e.into());
    }

    Ok(())
}

/// Handle regular messages
async fn handle_messages(bot: Bot, msg: Message, services: Arc<ServiceFactory>) -> HandlerResult {
    let services = (*services).clone();

    if let Err(e) = messages::handle_message(bot, msg, services).await {
        error!(error = %e, "Error handling message");
        return Err(e.into());
    }

    Ok(())
}

/// Handle callback queries
async fn handle_callbacks(
    bot: Bot,
    query: teloxide::types::CallbackQuery,
    services: Arc<ServiceFactory>,
) -> HandlerResult {
    let services = (*services).clone();

    if let Err(e) = callbacks::handle_callback_query(bot, query, services).await {
        error!(error = %e, "Error handling callback query");
        return Err(e.into());
    }

    Ok(())
}
