//! Precipitation Route
//!
//! - GET /api/v1.0/precipitation - last 12 months of precipitation readings

use axum::{extract::State, Json};
use serde_json::Value;
use std::sync::Arc;

use crate::api::dto::precipitation_pairs;
use crate::api::error::ApiResult;
use crate::api::routes::run_blocking;
use crate::api::state::AppState;

/// GET /api/v1.0/precipitation
///
/// All `(date, precipitation)` readings from the trailing 12 months, every
/// station, one single-key object per source row.
pub async fn precipitation(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Value>>> {
    let engine = Arc::clone(&state.engine);
    let readings = run_blocking(move || Ok(engine.precipitation_window()?)).await?;
    Ok(Json(precipitation_pairs(readings)))
}
