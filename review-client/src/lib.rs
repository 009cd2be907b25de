//! Review HTTP Clients
//!
//! Thin, typed HTTP clients for the two services the review bot talks to:
//! - [`PracticumClient`]: the homework status API (OAuth token, `from_date` cursor)
//! - [`TelegramClient`]: the Telegram Bot API (`sendMessage`)
//!
//! # Example
//!
//! ```no_run
//! use review_client::{PracticumClient, TelegramClient};
//!
//! #[tokio::main]
//! async fn main() -> review_client::Result<()> {
//!     let practicum = PracticumClient::new(
//!         "https://practicum.yandex.ru/api/user_api/homework_statuses/",
//!         "oauth-token",
//!     );
//!     let body = practicum.fetch_statuses(0).await?;
//!
//!     let telegram = TelegramClient::new("bot-token");
//!     telegram.send_message("12345", &body.to_string()).await?;
//!     Ok(())
//! }
//! ```

pub mod error;
mod practicum;
mod telegram;

pub use error::{ClientError, Result};
pub use practicum::{DEFAULT_ENDPOINT, PracticumClient};
pub use telegram::{DEFAULT_API_URL, TelegramClient};

use serde::de::DeserializeOwned;

// =============================================================================
// Response Handlers
// =============================================================================

/// Check the status code and deserialize a JSON body
///
/// Non-success statuses become [`ClientError::ApiError`] carrying the body
/// text, undecodable bodies become [`ClientError::ParseError`].
async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();

    if !status.is_success() {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(ClientError::api_error(status.as_u16(), error_text));
    }

    response
        .json()
        .await
        .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
}
