//! Store error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while opening or reading the climate store
#[derive(Debug, Error)]
pub enum StoreError {
    /// The database file could not be opened
    #[error("failed to open store at {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// A required table is absent from the store
    #[error("store is missing required table {0:?}")]
    MissingTable(String),

    /// A required column is absent from a table
    #[error("table {table:?} is missing required column {column:?}")]
    MissingColumn { table: String, column: String },

    /// A query against the store failed
    #[error("store query failed: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;
