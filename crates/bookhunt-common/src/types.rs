//! Core type definitions for book records.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Where a reader is with a book.
///
/// The known states have canonical spellings. Any other text is kept
/// verbatim in `Other` so rows written by other tools survive a round-trip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum ReadingStatus {
    /// Not started yet.
    #[default]
    ToRead,
    /// In progress.
    CurrentlyReading,
    /// Finished.
    Completed,
    /// Free-form status text.
    Other(String),
}

impl ReadingStatus {
    /// The text stored in the `status` column.
    pub fn as_str(&self) -> &str {
        match self {
            Self::ToRead => "to-read",
            Self::CurrentlyReading => "currently reading",
            Self::Completed => "completed",
            Self::Other(s) => s,
        }
    }
}

impl fmt::Display for ReadingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReadingStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "to-read" => Self::ToRead,
            "currently reading" => Self::CurrentlyReading,
            "completed" => Self::Completed,
            other => Self::Other(other.to_string()),
        })
    }
}

impl From<&str> for ReadingStatus {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(status) => status,
            Err(never) => match never {},
        }
    }
}

impl Serialize for ReadingStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ReadingStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reading_status_parse() {
        assert_eq!(ReadingStatus::from("to-read"), ReadingStatus::ToRead);
        assert_eq!(
            ReadingStatus::from("currently reading"),
            ReadingStatus::CurrentlyReading
        );
        assert_eq!(ReadingStatus::from("completed"), ReadingStatus::Completed);
        assert_eq!(
            ReadingStatus::from("abandoned"),
            ReadingStatus::Other("abandoned".to_string())
        );
    }

    #[test]
    fn test_reading_status_display() {
        assert_eq!(ReadingStatus::ToRead.to_string(), "to-read");
        assert_eq!(ReadingStatus::CurrentlyReading.to_string(), "currently reading");
        assert_eq!(ReadingStatus::Completed.to_string(), "completed");
        assert_eq!(ReadingStatus::Other("paused".into()).to_string(), "paused");
    }

    #[test]
    fn test_reading_status_default() {
        assert_eq!(ReadingStatus::default(), ReadingStatus::ToRead);
    }

    #[test]
    fn test_reading_status_serde() {
        let json = serde_json::to_string(&ReadingStatus::CurrentlyReading).unwrap();
        assert_eq!(json, "\"currently reading\"");

        let status: ReadingStatus = serde_json::from_str("\"on-hold\"").unwrap();
        assert_eq!(status, ReadingStatus::Other("on-hold".to_string()));
    }
}
