//! Rust models matching the `books` table.

use bookhunt_common::{BookId, ReadingStatus};
use serde::{Deserialize, Serialize};

/// A stored book row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub genre: Option<String>,
    pub year: Option<i64>,
    pub rating: Option<f64>,
    pub status: ReadingStatus,
}

/// Field values for a book that has not been stored yet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub year: Option<i64>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub status: ReadingStatus,
}

impl NewBook {
    /// Start a record with the two required fields.
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            genre: None,
            year: None,
            rating: None,
            status: ReadingStatus::default(),
        }
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    pub fn with_year(mut self, year: i64) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn with_status(mut self, status: ReadingStatus) -> Self {
        self.status = status;
        self
    }

    /// Attach the id assigned on insert.
    pub fn into_book(self, id: BookId) -> Book {
        Book {
            id,
            title: self.title,
            author: self.author,
            genre: self.genre,
            year: self.year,
            rating: self.rating,
            status: self.status,
        }
    }
}
