//! # Kona
//!
//! Read-only HTTP API over historical climate observations: daily
//! precipitation and temperature readings tied to weather stations, stored
//! in an externally populated SQLite database.
//!
//! ## Modules
//!
//! - [`store`]: schema binding — maps the `measurement` and `station`
//!   tables onto typed records, validating the schema at startup
//! - [`dates`]: strict `YYYY-MM-DD` parsing and calendar-correct day math
//! - [`query`]: the analytical core — latest-date anchor, trailing
//!   12-month window, most-active station, min/avg/max aggregates
//! - [`api`]: REST API server with Axum
//! - [`config`]: TOML config with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use kona::query::QueryEngine;
//! use kona::store::Store;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = Store::open("climate.sqlite")?;
//!     let engine = QueryEngine::new(store);
//!
//!     let latest = engine.latest_date()?;
//!     let window = engine.precipitation_window()?;
//!     println!("{} readings up to {}", window.len(), latest);
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod dates;
pub mod query;
pub mod store;

// Re-export top-level types for convenience
pub use api::{build_router, serve, ApiError, ApiResult, AppState};

pub use config::{ApiConfig, Config, ConfigError, DatabaseConfig, LoggingConfig};

pub use dates::{format_date, parse_date, subtract_days, DateParseError, DATE_FORMAT};

pub use query::{
    PrecipReading, QueryEngine, QueryError, QueryResult, TemperatureReading, TemperatureStats,
    TRAILING_WINDOW_DAYS,
};

pub use store::{Measurement, Station, Store, StoreError, StoreResult};
