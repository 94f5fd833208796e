//! Schema migrations for the book database.
//!
//! Each migration is embedded SQL recorded in `schema_migrations` once
//! applied, so reopening a file only runs what is new.
//!
//! Files written before versioning existed carry a `books` table whose `id`
//! column is not a rowid alias and is NULL on every row. When the first
//! migration finds such a table it sets it aside, creates the current table,
//! and copies the rows across keyed by their SQLite rowid.

use rusqlite::{Connection, Result};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MigrationError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Migration {0} failed: {1}")]
    Failed(usize, String),
}

struct Migration {
    version: usize,
    name: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    name: "initial",
    sql: include_str!("001_initial.sql"),
}];

/// Name the unversioned table is moved to while its rows are copied.
const UNVERSIONED_BOOKS: &str = "books_unversioned";

fn init_migrations_table(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_migrations (
            version INTEGER PRIMARY KEY NOT NULL,
            name TEXT NOT NULL,
            applied_at TEXT NOT NULL DEFAULT (datetime('now'))
        )",
        [],
    )?;
    Ok(())
}

fn get_current_version(conn: &Connection) -> Result<usize> {
    conn.query_row("SELECT MAX(version) FROM schema_migrations", [], |row| {
        row.get::<_, Option<usize>>(0)
    })
    .map(|version| version.unwrap_or(0))
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?",
        [name],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

/// Move an unversioned `books` table out of the way. Returns whether one
/// was found.
fn set_aside_unversioned_books(conn: &Connection) -> Result<bool> {
    if !table_exists(conn, "books")? {
        return Ok(false);
    }
    conn.execute_batch(&format!("ALTER TABLE books RENAME TO {UNVERSIONED_BOOKS};"))?;
    Ok(true)
}

/// Copy rows from the set-aside table into the new `books` table and drop it.
///
/// The old `id` column is ignored; each row keeps its rowid as its id so ids
/// stay unique and stable. A row that breaks a current constraint aborts the
/// migration.
fn import_unversioned_books(conn: &Connection) -> Result<usize> {
    let copied = conn.execute(
        &format!(
            "INSERT INTO books (id, title, author, genre, year, rating, status)
             SELECT rowid, title, author, genre, year, rating, COALESCE(status, 'to-read')
             FROM {UNVERSIONED_BOOKS} ORDER BY rowid"
        ),
        [],
    )?;
    conn.execute_batch(&format!("DROP TABLE {UNVERSIONED_BOOKS};"))?;
    Ok(copied)
}

fn apply_migration(
    conn: &Connection,
    migration: &Migration,
    adopt_unversioned: bool,
) -> Result<(), MigrationError> {
    let failed = |e: rusqlite::Error| MigrationError::Failed(migration.version, e.to_string());

    let set_aside = adopt_unversioned && set_aside_unversioned_books(conn).map_err(failed)?;

    conn.execute_batch(migration.sql).map_err(failed)?;

    if set_aside {
        let copied = import_unversioned_books(conn).map_err(failed)?;
        tracing::info!("Imported {} books from an unversioned database", copied);
    }

    conn.execute(
        "INSERT INTO schema_migrations (version, name) VALUES (?, ?)",
        rusqlite::params![migration.version, migration.name],
    )
    .map_err(failed)?;

    Ok(())
}

/// Apply every pending migration, each in its own transaction.
///
/// Returns the number of migrations applied; zero when the schema is
/// already current.
pub fn run_migrations(conn: &Connection) -> Result<usize, MigrationError> {
    init_migrations_table(conn)?;

    let current_version = get_current_version(conn)?;
    let mut applied_count = 0;

    for migration in MIGRATIONS.iter().filter(|m| m.version > current_version) {
        let tx = conn.unchecked_transaction()?;

        apply_migration(&tx, migration, current_version == 0)?;

        tx.commit()
            .map_err(|e| MigrationError::Failed(migration.version, e.to_string()))?;

        applied_count += 1;
        tracing::info!("Applied migration {}: {}", migration.version, migration.name);
    }

    if applied_count == 0 {
        tracing::debug!(version = current_version, "Schema is up to date");
    }

    Ok(applied_count)
}
