//! Climate REST API
//!
//! HTTP API layer, built with Axum. Every endpoint is a read-only GET that
//! translates directly into one query engine operation.
//!
//! # Endpoints
//!
//! - `GET /` - plain-text route index
//! - `GET /api/v1.0/precipitation` - trailing 12 months of precipitation
//! - `GET /api/v1.0/stations` - station-id listing
//! - `GET /api/v1.0/tobs` - trailing 12 months of temperatures for the
//!   most-active station
//! - `GET /api/v1.0/temp/:start` - min/avg/max temperature from a start date
//! - `GET /api/v1.0/temp/:start/:end` - min/avg/max over a closed range
//!
//! # Example
//!
//! ```rust,ignore
//! use kona::api::{serve, AppState};
//! use kona::config::Config;
//! use kona::query::QueryEngine;
//! use kona::store::Store;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!     let store = Store::open(&config.database.path)?;
//!     let engine = Arc::new(QueryEngine::new(store));
//!
//!     let state = AppState::new(engine, config.api.clone());
//!     serve(state, &config.api).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::ApiConfig;

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/precipitation", get(routes::precipitation::precipitation))
        .route("/stations", get(routes::stations::stations))
        .route("/tobs", get(routes::tobs::tobs))
        .route("/temp/:start", get(routes::temp::stats_from_start))
        .route("/temp/:start/:end", get(routes::temp::stats_for_range));

    // Create shared state
    let shared_state = Arc::new(state);

    Router::new()
        .route("/", get(routes::index::route_index))
        .nest("/api/v1.0", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(shared_state)
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Climate API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Climate API shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::QueryEngine;
    use crate::store::Store;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use rusqlite::Connection;
    use serde_json::Value;
    use tempfile::tempdir;
    use tower::util::ServiceExt;

    fn create_test_app(dir: &std::path::Path) -> Router {
        let path = dir.join("climate.sqlite");
        let conn = Connection::open(&path).unwrap();
        conn.execute_batch(
            "
            CREATE TABLE measurement (
                id INTEGER PRIMARY KEY,
                station TEXT, date TEXT, prcp FLOAT, tobs FLOAT
            );
            CREATE TABLE station (
                id INTEGER PRIMARY KEY,
                station TEXT, name TEXT,
                latitude FLOAT, longitude FLOAT, elevation FLOAT
            );
            INSERT INTO measurement (station, date, prcp, tobs) VALUES
                ('S1', '2016-08-23', 0.5, 60.0),
                ('S1', '2016-08-24', 0.7, 61.0),
                ('S1', '2017-08-22', 0.0, 79.0),
                ('S1', '2017-08-23', 0.08, 81.0),
                ('S2', '2017-08-23', 0.45, NULL);
            INSERT INTO station (station, name, latitude, longitude, elevation) VALUES
                ('S1', 'WAIKIKI', 21.27, -157.82, 3.0),
                ('S2', 'KANEOHE', 21.42, -157.80, 14.6);
            ",
        )
        .unwrap();
        drop(conn);

        let store = Store::open(&path).unwrap();
        let engine = Arc::new(QueryEngine::new(store));
        let state = AppState::new(engine, ApiConfig::default());
        build_router(state)
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_route_index() {
        let dir = tempdir().unwrap();
        let app = create_test_app(dir.path());

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let text = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(text.contains("/api/v1.0/precipitation"));
        assert!(text.contains("/api/v1.0/temp/{start}/{end}"));
    }

    #[tokio::test]
    async fn test_precipitation_window_shape() {
        let dir = tempdir().unwrap();
        let app = create_test_app(dir.path());

        let (status, body) = get_json(app, "/api/v1.0/precipitation").await;
        assert_eq!(status, StatusCode::OK);

        // cutoff row 2016-08-23 excluded; S1 and S2 both reported on
        // 2017-08-23 and stay distinct single-key elements
        let pairs = body.as_array().unwrap();
        assert_eq!(pairs.len(), 4);
        for pair in pairs {
            assert_eq!(pair.as_object().unwrap().len(), 1);
        }
        assert_eq!(pairs[0]["2016-08-24"], 0.7);
        assert_eq!(pairs[2]["2017-08-23"], 0.08);
        assert_eq!(pairs[3]["2017-08-23"], 0.45);
    }

    #[tokio::test]
    async fn test_stations_listing() {
        let dir = tempdir().unwrap();
        let app = create_test_app(dir.path());

        let (status, body) = get_json(app, "/api/v1.0/stations").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!(["S1", "S2"]));
    }

    #[tokio::test]
    async fn test_tobs_most_active_station() {
        let dir = tempdir().unwrap();
        let app = create_test_app(dir.path());

        let (status, body) = get_json(app, "/api/v1.0/tobs").await;
        assert_eq!(status, StatusCode::OK);

        // S1 has four rows to S2's one; three fall inside the window
        let observations = body.as_array().unwrap();
        assert_eq!(observations.len(), 3);
        assert_eq!(observations[0]["Date"], "2016-08-24");
        assert_eq!(observations[0]["Observed Temperature"], 61.0);
        assert_eq!(observations[2]["Date"], "2017-08-23");
    }

    #[tokio::test]
    async fn test_temp_stats_from_start() {
        let dir = tempdir().unwrap();
        let app = create_test_app(dir.path());

        let (status, body) = get_json(app, "/api/v1.0/temp/2017-01-01").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["Minimum Temperature"], 79.0);
        assert_eq!(body["Average Temperature"], 80.0);
        assert_eq!(body["Maximum Temperature"], 81.0);
    }

    #[tokio::test]
    async fn test_temp_stats_closed_range() {
        let dir = tempdir().unwrap();
        let app = create_test_app(dir.path());

        let (status, body) = get_json(app, "/api/v1.0/temp/2016-08-23/2016-08-24").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["Minimum Temperature"], 60.0);
        assert_eq!(body["Maximum Temperature"], 61.0);
    }

    #[tokio::test]
    async fn test_temp_stats_beyond_all_data_is_structured_not_500() {
        let dir = tempdir().unwrap();
        let app = create_test_app(dir.path());

        let (status, body) = get_json(app, "/api/v1.0/temp/2099-01-01").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "No data available for the given start date.");
    }

    #[tokio::test]
    async fn test_temp_stats_empty_range_message() {
        let dir = tempdir().unwrap();
        let app = create_test_app(dir.path());

        let (status, body) = get_json(app, "/api/v1.0/temp/2099-01-01/2099-12-31").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "No data available for the given date range.");
    }

    #[tokio::test]
    async fn test_temp_stats_malformed_date() {
        let dir = tempdir().unwrap();
        let app = create_test_app(dir.path());

        let (status, body) = get_json(app, "/api/v1.0/temp/not-a-date").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("YYYY-MM-DD"));
    }
}
