//! API route handlers, one module per endpoint.

pub mod index;
pub mod precipitation;
pub mod stations;
pub mod temp;
pub mod tobs;

use crate::api::error::{ApiError, ApiResult};

/// Run a blocking store query off the async runtime.
///
/// rusqlite is synchronous; every handler pushes its query onto the
/// blocking pool so request handling never stalls a runtime worker. The
/// connection is opened and dropped inside the closure.
pub(crate) async fn run_blocking<T, F>(query: F) -> ApiResult<T>
where
    F: FnOnce() -> ApiResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(query)
        .await
        .map_err(|e| ApiError::Internal(format!("query task failed: {e}")))?
}
