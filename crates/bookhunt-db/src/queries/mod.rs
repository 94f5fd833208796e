//! Database query modules.
//!
//! - books: Book create, lookup, listing, and deletion

pub mod books;

use bookhunt_common::Error;
use rusqlite::ErrorCode;

/// Classify a rusqlite error, separating constraint violations from other
/// statement failures.
pub(crate) fn sql_error(e: rusqlite::Error) -> Error {
    match e.sqlite_error_code() {
        Some(ErrorCode::ConstraintViolation) => Error::integrity(e.to_string()),
        _ => Error::database(e.to_string()),
    }
}
