//! Status source service
//!
//! Supplies raw homework status responses for a query window.

use async_trait::async_trait;
use review_client::{ClientError, PracticumClient};
use serde_json::Value as JsonValue;

/// Service trait for fetching homework statuses
#[async_trait]
pub trait StatusSource: Send + Sync {
    /// Fetches statuses changed since `cursor`
    ///
    /// # Arguments
    /// * `cursor` - Unix timestamp where the query window starts
    ///
    /// # Returns
    /// The raw response body; its shape is validated by the caller
    async fn fetch_statuses(&self, cursor: i64) -> Result<JsonValue, ClientError>;
}

/// StatusSource backed by the homework status API
pub struct PracticumStatusSource {
    client: PracticumClient,
}

impl PracticumStatusSource {
    /// Creates a new status source
    pub fn new(client: PracticumClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl StatusSource for PracticumStatusSource {
    async fn fetch_statuses(&self, cursor: i64) -> Result<JsonValue, ClientError> {
        self.client.fetch_statuses(cursor).await
    }
}
