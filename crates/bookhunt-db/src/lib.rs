//! Bookhunt-DB: Database schema, migrations, and the book store
//!
//! This crate provides persistence for bookhunt using SQLite through
//! rusqlite. It owns exactly one table of books.
//!
//! # Modules
//!
//! - `migrations` - Database schema migrations
//! - `models` - Rust models matching the database schema
//! - `queries` - Row-level query functions over a `rusqlite::Connection`
//! - `store` - `BookStore`, the owned handle the shells hold
//!
//! # Example
//!
//! ```
//! use bookhunt_db::models::NewBook;
//! use bookhunt_db::store::BookStore;
//!
//! let store = BookStore::open_in_memory().unwrap();
//! let book = store
//!     .create_book(&NewBook::new("1984", "George Orwell").with_rating(4.5))
//!     .unwrap();
//! assert_eq!(store.list_books().unwrap(), vec![book]);
//! store.close().unwrap();
//! ```

pub mod migrations;
pub mod models;
pub mod queries;
pub mod store;

pub use models::{Book, NewBook};
pub use store::BookStore;
