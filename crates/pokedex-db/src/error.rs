//! Error types for the data layer.
//!
//! All errors are propagated via [`DbError`] which wraps the underlying
//! [`sqlx`] error with context about which operation failed.

/// Errors that can occur in the data layer.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// A `PostgreSQL` operation failed.
    ///
    /// This covers connectivity loss, SQL syntax errors, constraint
    /// violations, and `RowNotFound` from statements expected to
    /// return exactly one row.
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] sqlx::Error),

    /// A configuration error (e.g. an unparseable database URL).
    #[error("Configuration error: {0}")]
    Config(String),
}
