//! Typed ID wrapper for book rows.
//!
//! Books are keyed by SQLite's integer rowid. Wrapping it keeps a raw count or
//! year from being passed where a row identifier is expected.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::Error;

/// Unique identifier for a book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(i64);

impl BookId {
    /// The raw rowid value.
    #[must_use]
    pub fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for BookId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<BookId> for i64 {
    fn from(id: BookId) -> Self {
        id.0
    }
}

impl FromStr for BookId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|_| Error::invalid_input(format!("invalid book id: {:?}", s)))
    }
}

impl std::fmt::Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
