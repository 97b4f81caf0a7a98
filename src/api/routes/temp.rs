//! Temperature Statistics Routes
//!
//! - GET /api/v1.0/temp/:start - min/avg/max from a start date onward
//! - GET /api/v1.0/temp/:start/:end - min/avg/max over a closed range

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::NaiveDate;
use std::sync::Arc;

use crate::api::dto::TemperatureStatsDto;
use crate::api::error::{ApiError, ApiResult};
use crate::api::routes::run_blocking;
use crate::api::state::AppState;
use crate::dates::parse_date;
use crate::query::QueryError;

const NO_DATA_START: &str = "No data available for the given start date.";
const NO_DATA_RANGE: &str = "No data available for the given date range.";

/// GET /api/v1.0/temp/:start
///
/// Temperature aggregate over `date >= start`, open-ended.
pub async fn stats_from_start(
    State(state): State<Arc<AppState>>,
    Path(start): Path<String>,
) -> ApiResult<Json<TemperatureStatsDto>> {
    let start = parse_path_date(&start)?;
    stats(state, start, None, NO_DATA_START).await
}

/// GET /api/v1.0/temp/:start/:end
///
/// Temperature aggregate over `start <= date <= end`, both ends inclusive.
pub async fn stats_for_range(
    State(state): State<Arc<AppState>>,
    Path((start, end)): Path<(String, String)>,
) -> ApiResult<Json<TemperatureStatsDto>> {
    let start = parse_path_date(&start)?;
    let end = parse_path_date(&end)?;
    stats(state, start, Some(end), NO_DATA_RANGE).await
}

async fn stats(
    state: Arc<AppState>,
    start: NaiveDate,
    end: Option<NaiveDate>,
    no_data_message: &'static str,
) -> ApiResult<Json<TemperatureStatsDto>> {
    let engine = Arc::clone(&state.engine);
    let stats = run_blocking(move || {
        engine
            .temperature_stats(start, end)
            .map_err(|e| match e {
                QueryError::NoData => ApiError::NoData(no_data_message.to_string()),
                other => other.into(),
            })
    })
    .await?;

    Ok(Json(stats.into()))
}

fn parse_path_date(raw: &str) -> ApiResult<NaiveDate> {
    parse_date(raw).map_err(|e| ApiError::BadRequest(e.to_string()))
}
