//! Notifier service
//!
//! Delivers rendered messages to the single destination chat.

use async_trait::async_trait;
use review_client::{ClientError, TelegramClient};

/// Service trait for delivering notifications
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Sends a message to the destination chat
    async fn notify(&self, message: &str) -> Result<(), ClientError>;
}

/// Notifier that posts to a Telegram chat
pub struct TelegramNotifier {
    client: TelegramClient,
    chat_id: String,
}

impl TelegramNotifier {
    /// Creates a notifier bound to `chat_id`
    ///
    /// # Arguments
    /// * `client` - Bot API client
    /// * `chat_id` - Numeric chat id or `@channel` username
    pub fn new(client: TelegramClient, chat_id: String) -> Self {
        Self { client, chat_id }
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn notify(&self, message: &str) -> Result<(), ClientError> {
        self.client.send_message(&self.chat_id, message).await
    }
}
