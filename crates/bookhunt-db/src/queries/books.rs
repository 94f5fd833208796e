//! Book database queries.
//!
//! This module provides create, read, and delete operations for books.
//! Rows are never updated in place.

use bookhunt_common::{BookId, Error, ReadingStatus, Result};
use rusqlite::{Connection, Row};

use super::sql_error;
use crate::models::{Book, NewBook};

const BOOK_COLUMNS: &str = "id, title, author, genre, year, rating, status";

fn row_to_book(row: &Row) -> rusqlite::Result<Book> {
    let status: Option<String> = row.get(6)?;
    Ok(Book {
        id: BookId::from(row.get::<_, i64>(0)?),
        title: row.get(1)?,
        author: row.get(2)?,
        genre: row.get(3)?,
        year: row.get(4)?,
        rating: row.get(5)?,
        status: status
            .as_deref()
            .map(ReadingStatus::from)
            .unwrap_or_default(),
    })
}

/// Insert a new book.
///
/// Range and emptiness rules are enforced by the table's CHECK constraints,
/// so a rejected record surfaces as [`Error::Integrity`] and leaves the table
/// untouched.
///
/// # Arguments
///
/// * `conn` - Database connection
/// * `book` - Field values to store
///
/// # Returns
///
/// * `Ok(Book)` - The book as stored, read back with its assigned id
/// * `Err(Error)` - If a constraint or other database error occurs
pub fn create_book(conn: &Connection, book: &NewBook) -> Result<Book> {
    // SQLite binds NaN as NULL, which would slip past the rating CHECK.
    if book.rating.is_some_and(f64::is_nan) {
        return Err(Error::integrity("rating must be a number between 0 and 5"));
    }

    conn.execute(
        "INSERT INTO books (title, author, genre, year, rating, status)
         VALUES (:title, :author, :genre, :year, :rating, :status)",
        rusqlite::named_params! {
            ":title": book.title,
            ":author": book.author,
            ":genre": book.genre,
            ":year": book.year,
            ":rating": book.rating,
            ":status": book.status.as_str(),
        },
    )
    .map_err(sql_error)?;

    let id = BookId::from(conn.last_insert_rowid());
    get_book(conn, id)?
        .ok_or_else(|| Error::database(format!("book {} missing after insert", id)))
}

/// Get a book by ID.
///
/// # Returns
///
/// * `Ok(Some(Book))` - The book if found
/// * `Ok(None)` - If the book does not exist
/// * `Err(Error)` - If a database error occurs
pub fn get_book(conn: &Connection, id: BookId) -> Result<Option<Book>> {
    let result = conn.query_row(
        &format!("SELECT {BOOK_COLUMNS} FROM books WHERE id = :id"),
        rusqlite::named_params! { ":id": id.get() },
        row_to_book,
    );

    match result {
        Ok(book) => Ok(Some(book)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(sql_error(e)),
    }
}

/// List all books ordered by title.
///
/// Titles compare with the BINARY collation (byte order), so digits sort
/// before upper-case letters and upper-case before lower-case. Equal titles
/// fall back to insertion order.
pub fn list_books(conn: &Connection) -> Result<Vec<Book>> {
    let mut stmt = conn
        .prepare(&format!(
            "SELECT {BOOK_COLUMNS} FROM books ORDER BY title COLLATE BINARY ASC, id ASC"
        ))
        .map_err(sql_error)?;

    let books = stmt
        .query_map([], row_to_book)
        .map_err(sql_error)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(sql_error)?;

    Ok(books)
}

/// Count stored books.
pub fn count_books(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM books", [], |row| row.get(0))
        .map_err(sql_error)
}

/// Delete a book.
///
/// # Returns
///
/// * `Ok(true)` - If the book was deleted
/// * `Ok(false)` - If no book had that id
/// * `Err(Error)` - If a database error occurs
pub fn delete_book(conn: &Connection, id: BookId) -> Result<bool> {
    let rows_affected = conn
        .execute(
            "DELETE FROM books WHERE id = :id",
            rusqlite::named_params! { ":id": id.get() },
        )
        .map_err(sql_error)?;

    Ok(rows_affected > 0)
}
