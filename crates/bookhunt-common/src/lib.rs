//! Bookhunt-Common: Shared types, constants, and utilities.
//!
//! This crate provides common functionality used across bookhunt:
//!
//! - **Typed IDs**: `BookId`, a wrapper over the table's integer primary key
//! - **Core Types**: `ReadingStatus`, the informal set of reading states
//! - **Display Helpers**: Formatting used by the shells when listing books
//! - **Error Handling**: Common error types and result aliases
//!
//! # Examples
//!
//! ```
//! use bookhunt_common::{BookId, Error, ReadingStatus, Result};
//! use bookhunt_common::display::format_rating;
//!
//! let id = BookId::from(7);
//! assert_eq!(id.to_string(), "7");
//!
//! let status: ReadingStatus = "completed".parse().unwrap();
//! assert_eq!(status, ReadingStatus::Completed);
//!
//! assert_eq!(format_rating(Some(4.5)), "4.5/5");
//!
//! fn example() -> Result<()> {
//!     Err(Error::not_found("book 7"))
//! }
//! assert!(example().is_err());
//! ```

pub mod display;
pub mod error;
pub mod ids;
pub mod types;

pub use error::{Error, Result};
pub use ids::BookId;
pub use types::ReadingStatus;
