//! Status poller
//!
//! Polls the status API for review changes and relays them to the chat.
//! One cycle runs at a time; the cursor only moves after a cycle that
//! fetched, validated and rendered the whole batch.

use review_core::domain::render_message;
use review_core::dto::validate_response;
use std::sync::Arc;
use tokio::time;
use tracing::{debug, error, info};

use crate::config::Config;
use crate::error::CycleError;
use crate::service::{Notifier, StatusSource};

/// Summary of a successful cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleOutcome {
    /// Messages delivered
    pub sent: usize,
    /// Messages the notifier failed to deliver
    pub failed: usize,
    /// Cursor after the cycle
    pub cursor: i64,
}

/// Poller that relays homework status changes to the chat
pub struct StatusPoller {
    config: Config,
    source: Arc<dyn StatusSource>,
    notifier: Arc<dyn Notifier>,
    cursor: i64,
}

impl StatusPoller {
    /// Creates a new poller whose cursor starts at the current time
    pub fn new(
        config: Config,
        source: Arc<dyn StatusSource>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            config,
            source,
            notifier,
            cursor: chrono::Utc::now().timestamp(),
        }
    }

    /// Overrides the starting cursor
    #[cfg(test)]
    pub fn with_cursor(mut self, cursor: i64) -> Self {
        self.cursor = cursor;
        self
    }

    /// Start of the next query window
    #[allow(dead_code)]
    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    /// Starts the polling loop
    ///
    /// Returns only when a required credential is missing; every other
    /// failure is logged and retried after the poll interval.
    pub async fn run(&mut self) -> Result<(), CycleError> {
        if let Some(name) = self.config.missing_credential() {
            let err = CycleError::MissingCredentials(name);
            report(&err);
            return Err(err);
        }

        info!(
            "Starting status poller (interval: {:?}, cursor: {})",
            self.config.poll_interval, self.cursor
        );

        loop {
            match self.run_cycle().await {
                Ok(outcome) => {
                    info!(
                        "Cycle completed: {} sent, {} failed, next cursor {}",
                        outcome.sent, outcome.failed, outcome.cursor
                    );
                }
                Err(e) => {
                    report(&e);
                    if e.is_fatal() {
                        return Err(e);
                    }
                }
            }

            time::sleep(self.config.poll_interval).await;
        }
    }

    /// Performs a single poll cycle
    ///
    /// On error the cursor is left untouched so the same window is queried
    /// again. Notification failures do not fail the cycle.
    pub async fn run_cycle(&mut self) -> Result<CycleOutcome, CycleError> {
        debug!("Polling homework statuses from {}", self.cursor);

        let raw = self.source.fetch_statuses(self.cursor).await?;
        let batch = validate_response(&raw)?;

        if batch.homeworks.is_empty() {
            debug!("No new statuses");
        }

        // Render the whole batch first so a bad status never sends half of it.
        let messages = batch
            .homeworks
            .iter()
            .map(render_message)
            .collect::<Result<Vec<_>, _>>()?;

        let mut sent = 0;
        let mut failed = 0;

        for message in &messages {
            match self.notifier.notify(message).await {
                Ok(()) => {
                    info!("Sent notification: {}", message);
                    sent += 1;
                }
                Err(e) => {
                    error!("Failed to send notification: {}", e);
                    failed += 1;
                }
            }
        }

        match batch.current_date {
            Some(current_date) => self.cursor = current_date,
            None => debug!("Response has no current_date, keeping cursor {}", self.cursor),
        }

        Ok(CycleOutcome {
            sent,
            failed,
            cursor: self.cursor,
        })
    }
}

/// Logs a cycle error according to its kind
fn report(err: &CycleError) {
    match err {
        CycleError::MissingCredentials(name) => {
            error!("CRITICAL: {} is not set, the bot cannot start", name);
        }
        CycleError::Transport(e) if e.is_unauthorized() => {
            error!("Status API rejected the OAuth token: {}", e);
        }
        CycleError::Transport(e) => {
            error!("Failed to fetch homework statuses: {}", e);
        }
        CycleError::Shape(e) => {
            error!("CRITICAL: unexpected status API response: {}", e);
        }
        CycleError::UnknownStatus(e) => {
            error!("Status batch skipped: {}", e);
        }
    }
}
