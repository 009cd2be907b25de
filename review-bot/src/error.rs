//! Poll cycle errors

use review_client::ClientError;
use review_core::domain::UnknownStatus;
use review_core::dto::ShapeError;
use thiserror::Error;

/// Everything that can end a poll cycle early
#[derive(Debug, Error)]
pub enum CycleError {
    /// A required credential is empty; the loop must not start
    #[error("{0} environment variable not set")]
    MissingCredentials(&'static str),

    /// The status API could not be reached or answered with an error
    #[error("status request failed: {0}")]
    Transport(#[from] ClientError),

    /// The status API answered with an unexpected body
    #[error("malformed status response: {0}")]
    Shape(#[from] ShapeError),

    /// A homework carries a status the bot has no verdict for
    #[error(transparent)]
    UnknownStatus(#[from] UnknownStatus),
}

impl CycleError {
    /// Whether the poll loop has to stop
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::MissingCredentials(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_missing_credentials_is_fatal() {
        assert!(CycleError::MissingCredentials("TELEGRAM_TOKEN").is_fatal());
        assert!(!CycleError::from(ShapeError::MissingHomeworks).is_fatal());
        assert!(!CycleError::from(UnknownStatus("lost".to_string())).is_fatal());
        assert!(!CycleError::from(ClientError::api_error(500, "boom")).is_fatal());
    }

    #[test]
    fn test_display() {
        let err = CycleError::from(ShapeError::HomeworksNotAList);
        assert_eq!(
            err.to_string(),
            "malformed status response: \"homeworks\" is not a list"
        );
    }
}
