//! Review Bot
//!
//! Relays homework review status changes to a Telegram chat.
//!
//! Architecture:
//! - Configuration: Load credentials and settings from the environment / `.env`
//! - Services: Status source (homework API) and notifier (Telegram chat)
//! - Scheduler: The poll loop that owns the cursor
//!
//! The bot asks the status API for changes since its cursor, renders one
//! message per homework, sends them to the chat and sleeps until the next
//! cycle.

mod config;
mod error;
mod scheduler;
mod service;

use anyhow::Result;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::scheduler::StatusPoller;
use crate::service::{Notifier, PracticumStatusSource, StatusSource, TelegramNotifier};
use review_client::{PracticumClient, TelegramClient};

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine; the real environment may carry everything.
    let dotenv = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "review_bot=debug,review_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Review Bot");
    if let Ok(path) = dotenv {
        info!("Loaded environment from {}", path.display());
    }

    // Load configuration
    let config = load_config()?;
    info!(
        "Loaded configuration: endpoint={}, chat_id={}",
        config.practicum_endpoint, config.telegram_chat_id
    );

    let source: Arc<dyn StatusSource> = Arc::new(PracticumStatusSource::new(
        PracticumClient::new(&config.practicum_endpoint, &config.practicum_token),
    ));
    let notifier: Arc<dyn Notifier> = Arc::new(TelegramNotifier::new(
        TelegramClient::with_base_url(&config.telegram_api_url, &config.telegram_token),
        config.telegram_chat_id.clone(),
    ));

    info!("Services initialized");

    let mut poller = StatusPoller::new(config, source, notifier);

    // Start polling loop; it only returns once a credential is missing,
    // which has already been logged as critical.
    if let Err(e) = poller.run().await {
        info!("Poller stopped: {}", e);
    }

    Ok(())
}

/// Loads and validates configuration from environment variables
fn load_config() -> Result<Config> {
    let config = Config::from_env()?;

    if let Err(e) = config.validate() {
        error!("CRITICAL: invalid configuration: {:#}", e);
        return Err(e);
    }

    Ok(config)
}
