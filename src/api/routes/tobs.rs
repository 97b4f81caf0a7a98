//! Temperature Observations Route
//!
//! - GET /api/v1.0/tobs - last 12 months of observations for the
//!   most-active station

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::ObservationDto;
use crate::api::error::ApiResult;
use crate::api::routes::run_blocking;
use crate::api::state::AppState;

/// GET /api/v1.0/tobs
///
/// Identifies the station with the most measurement rows, then returns its
/// temperature observations from the trailing 12 months.
pub async fn tobs(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<ObservationDto>>> {
    let engine = Arc::clone(&state.engine);
    let readings = run_blocking(move || {
        let station = engine.most_active_station()?;
        Ok(engine.recent_observations(&station)?)
    })
    .await?;

    Ok(Json(readings.into_iter().map(ObservationDto::from).collect()))
}
