//! Error types for the storage layer.
//!
//! [`StoreError`] is shared by every backend so the service and transport
//! layers can match on the contract failures (`NotFound`, `NoRecords`,
//! `AlreadyExists`) without knowing which store produced them.

/// Errors that can occur in a word store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No stored record carries the requested id.
    #[error("record not found with id {0}")]
    NotFound(String),

    /// A random lookup was made against an empty store.
    #[error("no records")]
    NoRecords,

    /// A record with the same `word` value is already stored.
    #[error("word already exists: {0}")]
    AlreadyExists(String),

    /// A store invariant was violated. This indicates a bug, not bad input.
    #[error("internal store error: {0}")]
    Internal(String),

    /// A `PostgreSQL` operation failed.
    #[error("PostgreSQL error: {0}")]
    Backend(#[from] sqlx::Error),

    /// A `PostgreSQL` migration failed.
    #[error("PostgreSQL migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// A configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}
