//! Query error types

use thiserror::Error;

/// Errors that can occur while running an analytical query
#[derive(Debug, Error)]
pub enum QueryError {
    /// No measurement rows satisfy the query
    #[error("no measurement data available")]
    NoData,

    /// Store layer error
    #[error(transparent)]
    Store(#[from] crate::store::StoreError),
}

/// Result type for query operations
pub type QueryResult<T> = Result<T, QueryError>;
