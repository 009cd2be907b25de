//! Homework domain types

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::dto::statuses::HomeworkEntry;

/// Review status reported for a homework
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    /// Wire representation used by the status API
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Reviewing => "reviewing",
            Self::Rejected => "rejected",
        }
    }

    /// Human-readable verdict sent to the chat
    pub fn verdict(self) -> &'static str {
        match self {
            Self::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Self::Reviewing => "Работа взята на проверку ревьюером.",
            Self::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

impl fmt::Display for HomeworkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A status string outside the known set
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("undocumented homework status: {0:?}")]
pub struct UnknownStatus(pub String);

impl FromStr for HomeworkStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "approved" => Ok(Self::Approved),
            "reviewing" => Ok(Self::Reviewing),
            "rejected" => Ok(Self::Rejected),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

/// Homework with a recognised review status
///
/// Lives for a single poll cycle. `Display` renders the notification text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Homework {
    pub name: String,
    pub status: HomeworkStatus,
}

impl TryFrom<&HomeworkEntry> for Homework {
    type Error = UnknownStatus;

    fn try_from(entry: &HomeworkEntry) -> Result<Self, Self::Error> {
        let status = entry.status.parse()?;
        Ok(Self {
            name: entry.homework_name.clone(),
            status,
        })
    }
}

impl fmt::Display for Homework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Changed review status of \"{}\": {}",
            self.name,
            self.status.verdict()
        )
    }
}

/// Renders the notification text for a raw homework entry
///
/// # Errors
/// Returns [`UnknownStatus`] when the entry's status is not one of the
/// documented values.
pub fn render_message(entry: &HomeworkEntry) -> Result<String, UnknownStatus> {
    Homework::try_from(entry).map(|homework| homework.to_string())
}
