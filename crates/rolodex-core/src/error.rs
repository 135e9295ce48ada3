//! Error types for rolodex.

use thiserror::Error;

/// Result type alias using rolodex's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for rolodex operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Database operation failed (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The database could not be reached
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    /// A unique constraint rejected the write
    #[error("Unique constraint violation on {constraint}: {message}")]
    UniqueViolation { constraint: String, message: String },

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Classify a driver error into the rolodex taxonomy.
    ///
    /// Anything that is neither a unique violation nor a connectivity failure
    /// stays wrapped as [`Error::Database`].
    pub fn from_store(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                Error::UniqueViolation {
                    constraint: db_err.constraint().unwrap_or_default().to_string(),
                    message: db_err.message().to_string(),
                }
            }
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_) => Error::StoreUnavailable(err.to_string()),
            _ => Error::Database(err),
        }
    }
}
