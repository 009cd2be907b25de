//! Telegram Bot API endpoint

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ClientError, Result};

/// Production base URL of the Telegram Bot API
pub const DEFAULT_API_URL: &str = "https://api.telegram.org";

/// HTTP client for the Telegram Bot API
#[derive(Clone)]
pub struct TelegramClient {
    /// Base URL of the bot API (e.g., "https://api.telegram.org")
    base_url: String,
    /// Bot token issued by BotFather
    token: String,
    /// HTTP client instance
    client: Client,
}

impl std::fmt::Debug for TelegramClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The token is part of every request URL.
        f.debug_struct("TelegramClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

/// Envelope every bot API method responds with
#[derive(Debug, Deserialize)]
struct BotApiResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

impl TelegramClient {
    /// Create a new bot API client against the public Telegram endpoint
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_base_url(DEFAULT_API_URL, token)
    }

    /// Create a new bot API client against a custom base URL
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the bot API (trailing slash is trimmed)
    /// * `token` - The bot token
    pub fn with_base_url(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self::with_client(base_url, token, Client::new())
    }

    /// Create a new bot API client with a custom HTTP client
    pub fn with_client(
        base_url: impl Into<String>,
        token: impl Into<String>,
        client: Client,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.into(),
            client,
        }
    }

    /// Get the base URL of the bot API
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a plain-text message to a chat
    ///
    /// # Arguments
    /// * `chat_id` - Numeric chat id or `@channel` username
    /// * `text` - Message text
    pub async fn send_message(&self, chat_id: &str, text: &str) -> Result<()> {
        let url = format!("{}/bot{}/sendMessage", self.base_url, self.token);

        debug!("Sending message to chat {}", chat_id);

        let response = self
            .client
            .post(&url)
            .json(&SendMessageRequest { chat_id, text })
            .send()
            .await
            .map_err(without_url)?;

        let status = response.status();
        let body = response.text().await.map_err(without_url)?;

        // The bot API reports failures in the body as well as the status line.
        match serde_json::from_str::<BotApiResponse>(&body) {
            Ok(envelope) if envelope.ok && status.is_success() => Ok(()),
            Ok(envelope) => Err(ClientError::api_error(
                status.as_u16(),
                envelope
                    .description
                    .unwrap_or_else(|| "Unknown error".to_string()),
            )),
            Err(_) if !status.is_success() => Err(ClientError::api_error(status.as_u16(), body)),
            Err(e) => Err(ClientError::ParseError(format!(
                "Failed to parse JSON response: {}",
                e
            ))),
        }
    }
}

/// Drops the request URL from a transport error; it embeds the bot token
fn without_url(e: reqwest::Error) -> ClientError {
    ClientError::RequestFailed(e.without_url())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = TelegramClient::with_base_url("http://localhost:8081/", "token");
        assert_eq!(client.base_url(), "http://localhost:8081");
    }

    #[test]
    fn test_debug_hides_token() {
        let client = TelegramClient::new("123:secret");
        assert!(!format!("{:?}", client).contains("secret"));
    }

    #[tokio::test]
    async fn test_transport_error_hides_token() {
        // Nothing listens on the discard port.
        let client = TelegramClient::with_base_url("http://127.0.0.1:9", "123:topsecret");

        let err = client.send_message("42", "hi").await.unwrap_err();

        assert!(matches!(err, ClientError::RequestFailed(_)));
        assert!(!err.to_string().contains("topsecret"));
        assert!(!format!("{:?}", err).contains("topsecret"));
    }

    #[tokio::test]
    async fn test_send_message_success() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/bot123:abc/sendMessage")
            .match_body(Matcher::Json(json!({"chat_id": "42", "text": "hello"})))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"ok":true,"result":{"message_id":1}}"#)
            .create_async()
            .await;

        let client = TelegramClient::with_base_url(server.url(), "123:abc");

        client.send_message("42", "hello").await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_send_message_reports_description() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/bot123:abc/sendMessage")
            .with_status(400)
            .with_header("content-type", "application/json")
            .with_body(r#"{"ok":false,"error_code":400,"description":"Bad Request: chat not found"}"#)
            .create_async()
            .await;

        let client = TelegramClient::with_base_url(server.url(), "123:abc");

        let err = client.send_message("0", "hello").await.unwrap_err();
        assert!(matches!(
            err,
            ClientError::ApiError { status: 400, ref message } if message == "Bad Request: chat not found"
        ));
    }

    #[tokio::test]
    async fn test_send_message_not_ok_with_success_status() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/bot123:abc/sendMessage")
            .with_status(200)
            .with_body(r#"{"ok":false}"#)
            .create_async()
            .await;

        let client = TelegramClient::with_base_url(server.url(), "123:abc");

        let err = client.send_message("42", "hello").await.unwrap_err();
        assert!(matches!(err, ClientError::ApiError { status: 200, .. }));
    }

    #[tokio::test]
    async fn test_send_message_plain_text_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/bot123:abc/sendMessage")
            .with_status(502)
            .with_body("Bad Gateway")
            .create_async()
            .await;

        let client = TelegramClient::with_base_url(server.url(), "123:abc");

        let err = client.send_message("42", "hello").await.unwrap_err();
        assert!(err.is_server_error());
    }
}
