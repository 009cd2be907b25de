//! Homework status API endpoint

use reqwest::Client;
use reqwest::header::AUTHORIZATION;
use serde_json::Value as JsonValue;
use tracing::debug;

use crate::error::Result;
use crate::handle_response;

/// Production endpoint of the homework status API
pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// HTTP client for the homework status API
#[derive(Debug, Clone)]
pub struct PracticumClient {
    /// Full URL of the statuses endpoint
    endpoint: String,
    /// OAuth token sent in the `Authorization` header
    token: String,
    /// HTTP client instance
    client: Client,
}

impl PracticumClient {
    /// Create a new status API client
    ///
    /// # Arguments
    /// * `endpoint` - Full URL of the statuses endpoint
    /// * `token` - OAuth token of the student
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        Self::with_client(endpoint, token, Client::new())
    }

    /// Create a new status API client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    pub fn with_client(
        endpoint: impl Into<String>,
        token: impl Into<String>,
        client: Client,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            token: token.into(),
            client,
        }
    }

    /// Get the endpoint this client queries
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch homework statuses changed since `from_date`
    ///
    /// A `from_date` of `0` queries from the current time. The body is
    /// returned as raw JSON; its shape is checked by the caller.
    ///
    /// # Arguments
    /// * `from_date` - Unix timestamp where the query window starts
    pub async fn fetch_statuses(&self, from_date: i64) -> Result<JsonValue> {
        let from_date = if from_date == 0 {
            chrono::Utc::now().timestamp()
        } else {
            from_date
        };

        debug!("Requesting homework statuses from_date={}", from_date);

        let response = self
            .client
            .get(&self.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await?;

        handle_response(response).await
    }
}
