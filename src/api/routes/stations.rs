//! Stations Route
//!
//! - GET /api/v1.0/stations - list every station id

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::api::routes::run_blocking;
use crate::api::state::AppState;

/// GET /api/v1.0/stations
///
/// Every station id in store order. An empty store yields an empty array.
pub async fn stations(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<String>>> {
    let engine = Arc::clone(&state.engine);
    let ids = run_blocking(move || Ok(engine.station_ids()?)).await?;
    Ok(Json(ids))
}
