//! Status API DTOs and response-shape validation

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use thiserror::Error;

/// A single homework as reported by the status API
///
/// Fields other than the name and status are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeworkEntry {
    pub homework_name: String,
    pub status: String,
}

/// Validated body of a status API response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusBatch {
    pub homeworks: Vec<HomeworkEntry>,
    /// Server time of the response; the next query window starts here
    #[serde(default)]
    pub current_date: Option<i64>,
}

/// The response body does not have the documented shape
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("response is not a JSON object")]
    NotAnObject,

    #[error("response has no \"homeworks\" key")]
    MissingHomeworks,

    #[error("\"homeworks\" is not a list")]
    HomeworksNotAList,

    #[error("homework #{index} is malformed: {reason}")]
    MalformedEntry { index: usize, reason: String },

    #[error("\"current_date\" is not an integer timestamp")]
    InvalidCurrentDate,
}

/// Checks the shape of a raw status API response
///
/// `current_date` may be absent or `null`; when present it must be an
/// integer.
pub fn validate_response(raw: &JsonValue) -> Result<StatusBatch, ShapeError> {
    let object = raw.as_object().ok_or(ShapeError::NotAnObject)?;

    let homeworks = object
        .get("homeworks")
        .ok_or(ShapeError::MissingHomeworks)?
        .as_array()
        .ok_or(ShapeError::HomeworksNotAList)?
        .iter()
        .enumerate()
        .map(|(index, value)| {
            HomeworkEntry::deserialize(value).map_err(|e| ShapeError::MalformedEntry {
                index,
                reason: e.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let current_date = match object.get("current_date") {
        None | Some(JsonValue::Null) => None,
        Some(value) => Some(value.as_i64().ok_or(ShapeError::InvalidCurrentDate)?),
    };

    Ok(StatusBatch {
        homeworks,
        current_date,
    })
}
