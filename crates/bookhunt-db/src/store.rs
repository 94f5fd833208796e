//! Owned book store.
//!
//! A [`BookStore`] wraps a single SQLite connection. Each shell constructs
//! one, keeps it for its own lifetime, and releases it with
//! [`BookStore::close`] (or by dropping it). There is no pool and no shared
//! global handle; concurrent processes rely on SQLite's own file locking.

use std::path::{Path, PathBuf};

use bookhunt_common::{BookId, Error, Result};
use rusqlite::Connection;

use crate::migrations;
use crate::models::{Book, NewBook};
use crate::queries::books;

/// Data-access handle for the `books` table.
#[derive(Debug)]
pub struct BookStore {
    conn: Connection,
    path: Option<PathBuf>,
}

impl BookStore {
    /// Open or create the database file at `path` and bring its schema up
    /// to date.
    ///
    /// Opening the same file again is safe: existing rows and tables are
    /// left as they are.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Storage`] if the file cannot be opened or created,
    /// is not a SQLite database, or its schema cannot be migrated.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use bookhunt_db::store::BookStore;
    ///
    /// let store = BookStore::open("books.db").unwrap();
    /// println!("{} books", store.count_books().unwrap());
    /// store.close().unwrap();
    /// ```
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path).map_err(|e| {
            Error::storage(format!("Failed to open database {}: {}", path.display(), e))
        })?;

        let store = Self::init(conn, Some(path.to_path_buf()))?;
        tracing::info!("Opened book store at {}", path.display());
        Ok(store)
    }

    /// Open a store backed by a private in-memory database.
    ///
    /// The contents are lost when the store is closed or dropped.
    ///
    /// ```
    /// use bookhunt_db::store::BookStore;
    ///
    /// let store = BookStore::open_in_memory().unwrap();
    /// assert!(store.list_books().unwrap().is_empty());
    /// ```
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| Error::storage(format!("Failed to open in-memory database: {}", e)))?;
        Self::init(conn, None)
    }

    fn init(conn: Connection, path: Option<PathBuf>) -> Result<Self> {
        migrations::run_migrations(&conn)
            .map_err(|e| Error::storage(format!("Failed to run migrations: {}", e)))?;
        Ok(Self { conn, path })
    }

    /// Path of the backing file, or `None` for an in-memory store.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Insert a book and return it with its assigned id.
    pub fn create_book(&self, book: &NewBook) -> Result<Book> {
        let created = books::create_book(&self.conn, book)?;
        tracing::debug!(id = %created.id, title = %created.title, "Created book");
        Ok(created)
    }

    /// Delete a book by id. Returns `false` if no such book existed.
    pub fn delete_book(&self, id: BookId) -> Result<bool> {
        let deleted = books::delete_book(&self.conn, id)?;
        tracing::debug!(%id, deleted, "Deleted book");
        Ok(deleted)
    }

    /// All books ordered by title.
    pub fn list_books(&self) -> Result<Vec<Book>> {
        books::list_books(&self.conn)
    }

    pub fn get_book(&self, id: BookId) -> Result<Option<Book>> {
        books::get_book(&self.conn, id)
    }

    pub fn count_books(&self) -> Result<i64> {
        books::count_books(&self.conn)
    }

    /// Release the underlying connection.
    pub fn close(self) -> Result<()> {
        let path = self.path;
        self.conn
            .close()
            .map_err(|(_, e)| Error::storage(format!("Failed to close database: {}", e)))?;
        match path {
            Some(path) => tracing::info!("Closed book store at {}", path.display()),
            None => tracing::debug!("Closed in-memory book store"),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookhunt_common::ReadingStatus;
    use tempfile::tempdir;

    fn orwell() -> NewBook {
        NewBook::new("1984", "George Orwell")
            .with_genre("Dystopian Fiction")
            .with_year(1949)
            .with_rating(4.5)
            .with_status(ReadingStatus::Completed)
    }

    #[test]
    fn test_open_creates_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("books.db");
        assert!(!path.exists());

        let store = BookStore::open(&path).unwrap();
        assert!(path.exists());
        assert_eq!(store.path(), Some(path.as_path()));
        store.close().unwrap();
    }

    #[test]
    fn test_open_twice_keeps_rows() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("books.db");

        let store = BookStore::open(&path).unwrap();
        let created = store.create_book(&orwell()).unwrap();
        store.close().unwrap();

        let store = BookStore::open(&path).unwrap();
        assert_eq!(store.list_books().unwrap(), vec![created]);
        store.close().unwrap();

        let store = BookStore::open(&path).unwrap();
        assert_eq!(store.count_books().unwrap(), 1);
    }

    #[test]
    fn test_two_handles_same_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("books.db");

        let desktop = BookStore::open(&path).unwrap();
        let web = BookStore::open(&path).unwrap();

        desktop.create_book(&orwell()).unwrap();
        assert_eq!(web.list_books().unwrap().len(), 1);
    }

    #[test]
    fn test_open_missing_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no/such/dir/books.db");

        let err = BookStore::open(&path).unwrap_err();
        assert!(matches!(err, Error::Storage(_)), "got {:?}", err);
    }

    #[test]
    fn test_open_not_a_database() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("books.db");
        std::fs::write(&path, "this is plain text, not sqlite\n".repeat(64)).unwrap();

        let err = BookStore::open(&path).unwrap_err();
        assert!(matches!(err, Error::Storage(_)), "got {:?}", err);
    }

    #[test]
    fn test_in_memory_has_no_path() {
        let store = BookStore::open_in_memory().unwrap();
        assert!(store.path().is_none());
        store.close().unwrap();
    }

    #[test]
    fn test_scenario_listing() {
        let store = BookStore::open_in_memory().unwrap();
        assert!(store.list_books().unwrap().is_empty());

        let created = store.create_book(&orwell()).unwrap();
        let books = store.list_books().unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0], created);
        assert_eq!(books[0].title, "1984");
        assert_eq!(books[0].author, "George Orwell");
        assert_eq!(books[0].genre.as_deref(), Some("Dystopian Fiction"));
        assert_eq!(books[0].year, Some(1949));
        assert_eq!(books[0].rating, Some(4.5));
        assert_eq!(books[0].status, ReadingStatus::Completed);

        store
            .create_book(&NewBook::new("Animal Farm", "George Orwell"))
            .unwrap();
        let titles: Vec<_> = store
            .list_books()
            .unwrap()
            .into_iter()
            .map(|b| b.title)
            .collect();
        assert_eq!(titles, vec!["1984", "Animal Farm"]);
    }

    #[test]
    fn test_failed_create_leaves_table_unchanged() {
        let store = BookStore::open_in_memory().unwrap();
        let existing = store.create_book(&orwell()).unwrap();

        assert!(store
            .create_book(&orwell().with_rating(5.1))
            .unwrap_err()
            .is_integrity());
        assert!(store
            .create_book(&orwell().with_rating(-1.0))
            .unwrap_err()
            .is_integrity());

        assert_eq!(store.list_books().unwrap(), vec![existing]);
    }

    #[test]
    fn test_delete_only_target_row() {
        let store = BookStore::open_in_memory().unwrap();
        let a = store.create_book(&orwell()).unwrap();
        let b = store
            .create_book(&NewBook::new("Animal Farm", "George Orwell"))
            .unwrap();
        let c = store
            .create_book(&NewBook::new("Brave New World", "Aldous Huxley"))
            .unwrap();

        assert!(store.delete_book(b.id).unwrap());
        assert_eq!(store.list_books().unwrap(), vec![a.clone(), c.clone()]);

        assert!(!store.delete_book(b.id).unwrap());
        assert_eq!(store.list_books().unwrap(), vec![a, c]);
    }

    #[test]
    fn test_open_unversioned_file_adopts_rows() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("books.db");

        let conn = Connection::open(&path).unwrap();
        conn.execute_batch(
            "CREATE TABLE books (
                 id INTEGEGER PRIMARY KEY,
                 title TEXT NOT NULL,
                 author TEXT NOT NULL,
                 genre TEXT,
                 year INTEGER,
                 rating REAL CHECK(rating >=0 AND rating <=5),
                 status TEXT DEFAULT 'to-read'
             );
             INSERT INTO books (title, author, genre, year, rating, status)
                 VALUES ('1984', 'George Orwell', 'Dystopian Fiction', 1949, 4.5, 'completed');
             INSERT INTO books (title, author, genre, year, rating, status)
                 VALUES ('Animal Farm', 'George Orwell', NULL, NULL, NULL, 'to-read');",
        )
        .unwrap();
        drop(conn);

        let store = BookStore::open(&path).unwrap();
        let books = store.list_books().unwrap();
        let ids: Vec<i64> = books.iter().map(|b| b.id.get()).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(books[0].rating, Some(4.5));
        assert_eq!(books[0].status, ReadingStatus::Completed);

        assert!(store.delete_book(BookId::from(1)).unwrap());

        let created = store.create_book(&NewBook::new("Emma", "Jane Austen")).unwrap();
        assert_eq!(created.id, BookId::from(3));
        assert_eq!(store.get_book(created.id).unwrap(), Some(created.clone()));
        assert!(store.delete_book(created.id).unwrap());
        store.close().unwrap();

        // Reopening does not import twice
        let store = BookStore::open(&path).unwrap();
        let titles: Vec<_> = store.list_books().unwrap().into_iter().map(|b| b.title).collect();
        assert_eq!(titles, vec!["Animal Farm"]);
    }
}
