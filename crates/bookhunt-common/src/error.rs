//! Common error types used throughout bookhunt.
//!
//! Storage failures are split by when they happen: opening the backing file
//! (`Storage`), violating a table constraint on write (`Integrity`), and
//! everything else a statement can report (`Database`).

/// Common error type for bookhunt.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The storage file could not be opened, created, or migrated.
    #[error("Storage error: {0}")]
    Storage(String),

    /// A write was rejected by a table constraint.
    #[error("Integrity error: {0}")]
    Integrity(String),

    /// A database statement failed for another reason.
    #[error("Database error: {0}")]
    Database(String),

    /// The requested book was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid input was provided.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// An I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a new Storage error.
    pub fn storage<S: Into<String>>(msg: S) -> Self {
        Self::Storage(msg.into())
    }

    /// Create a new Integrity error.
    pub fn integrity<S: Into<String>>(msg: S) -> Self {
        Self::Integrity(msg.into())
    }

    /// Create a new Database error.
    pub fn database<S: Into<String>>(msg: S) -> Self {
        Self::Database(msg.into())
    }

    /// Create a new NotFound error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a new InvalidInput error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Whether this error was caused by a rejected write.
    pub fn is_integrity(&self) -> bool {
        matches!(self, Self::Integrity(_))
    }

    /// Short machine-readable name for the error kind.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Storage(_) => "storage_error",
            Self::Integrity(_) => "integrity_error",
            Self::Database(_) => "database_error",
            Self::NotFound(_) => "not_found",
            Self::InvalidInput(_) => "invalid_input",
            Self::Io(_) => "io_error",
        }
    }
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;
